use crate::*;
use std::borrow::Cow;

macro_rules! impl_scalar {
    ($($prim:ty),* $(,)?) => {
        $(
            impl Debuggable for $prim {
                fn to_repr(&self) -> Repr {
                    Repr::from(*self)
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

impl Debuggable for str {
    fn to_repr(&self) -> Repr {
        Repr::Str(self.to_string())
    }
}

impl Debuggable for String {
    fn to_repr(&self) -> Repr {
        Repr::Str(self.clone())
    }
}

impl<B> Debuggable for Cow<'_, B>
where
    B: Debuggable + ToOwned + ?Sized,
{
    fn to_repr(&self) -> Repr {
        let borrowed: &B = self;
        borrowed.to_repr()
    }
}

impl Debuggable for () {
    fn to_repr(&self) -> Repr {
        Repr::unit()
    }
}
