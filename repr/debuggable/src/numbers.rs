//! Arbitrary precision numbers carry their exact decimal text.

#[cfg(any(feature = "decimal", feature = "bigint"))]
use crate::*;

#[cfg(feature = "decimal")]
impl Debuggable for rust_decimal::Decimal {
    fn to_repr(&self) -> Repr {
        Repr::vconstructor(["rust_decimal"], "Decimal", [Repr::Str(self.to_string())])
    }
}

#[cfg(feature = "bigint")]
impl Debuggable for num_bigint::BigInt {
    fn to_repr(&self) -> Repr {
        Repr::vconstructor(["num_bigint"], "BigInt", [Repr::Str(self.to_string())])
    }
}

#[cfg(feature = "bigint")]
impl Debuggable for num_bigint::BigUint {
    fn to_repr(&self) -> Repr {
        Repr::vconstructor(["num_bigint"], "BigUint", [Repr::Str(self.to_string())])
    }
}
