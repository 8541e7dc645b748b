// Macro to generate the primitive-side operator impls for each int type.
// The BigInt-side impls are generic over the ToBigInt marker; these cover
// the reverse direction, which coherence keeps us from writing generically.
#[macro_export]
macro_rules! bigint_math_impl {
    ( $t:ty ) => {
        impl Add<BigInt> for $t {
            type Output = BigInt;

            fn add(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) + rhs
            }
        }

        impl Sub<BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) - rhs
            }
        }

        impl Mul<BigInt> for $t {
            type Output = BigInt;

            fn mul(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) * rhs
            }
        }

        impl Div<BigInt> for $t {
            type Output = BigInt;

            fn div(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) / rhs
            }
        }

        impl Rem<BigInt> for $t {
            type Output = BigInt;

            fn rem(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) % rhs
            }
        }
    };
}
