use crate::*;

macro_rules! impl_tuple {
    ($($t:ident)+) => {
        impl<$($t: Debuggable),+> Debuggable for ($($t,)+) {
            #[allow(non_snake_case)]
            fn to_repr(&self) -> Repr {
                let ($($t,)+) = self;
                Repr::tuple([$($t.to_repr()),+])
            }
        }
    };
}

impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);
impl_tuple!(A B C D E F G);
impl_tuple!(A B C D E F G H);
impl_tuple!(A B C D E F G H I);
impl_tuple!(A B C D E F G H I J);
impl_tuple!(A B C D E F G H I J K);
impl_tuple!(A B C D E F G H I J K L);
impl_tuple!(A B C D E F G H I J K L M);
impl_tuple!(A B C D E F G H I J K L M N);
impl_tuple!(A B C D E F G H I J K L M N O);
impl_tuple!(A B C D E F G H I J K L M N O P);
impl_tuple!(A B C D E F G H I J K L M N O P Q);
impl_tuple!(A B C D E F G H I J K L M N O P Q R);
impl_tuple!(A B C D E F G H I J K L M N O P Q R S);
impl_tuple!(A B C D E F G H I J K L M N O P Q R S T);
impl_tuple!(A B C D E F G H I J K L M N O P Q R S T U);
impl_tuple!(A B C D E F G H I J K L M N O P Q R S T U V);
