pub use num_bigint::BigInt;
pub use num_bigint::BigUint;
pub use num_traits::One;
pub use num_traits::Zero;

pub use crate::math::decoder::decode;
pub use crate::math::decoder::recover_polynomial;
pub use crate::math::polynomial::Polynomial;
