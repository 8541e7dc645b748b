use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

use crate::{magnitude::Magnitude, BigInt, Repr, Sign};

/// Uniform sampler for `BigInt` ranges.
///
/// Ranges whose bounds are both compact sample the machine word directly
/// and are uniform in the integer sense. Wider ranges draw a random block
/// count and random blocks, then reject values outside the range, so the
/// distribution is only block-uniform. Narrow ranges between huge bounds
/// can reject for a long time.
///
/// This means it is almost certainly only useful for testing.
pub struct BigIntSampler {
    low: BigInt,
    high: BigInt,
    inclusive: bool,
}

impl UniformSampler for BigIntSampler {
    type X = BigInt;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (&low, &high) = (low.borrow(), high.borrow());
        assert!(high > low);

        BigIntSampler {
            low,
            high,
            inclusive: false,
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (&low, &high) = (low.borrow(), high.borrow());
        assert!(high >= low);

        BigIntSampler {
            low,
            high,
            inclusive: true,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        if let (Repr::Compact(low), Repr::Compact(high)) = (&self.low.repr, &self.high.repr) {
            let word_samp: UniformInt<i64> = if self.inclusive {
                UniformInt::new_inclusive(*low, *high)
            } else {
                UniformInt::new(*low, *high)
            };
            return BigInt::from(word_samp.sample(rng));
        }

        let max_width = self.low.width().max(self.high.width());
        let spans_negative = self.low.is_negative();

        loop {
            let width = rng.gen_range(1..=max_width);
            let blocks: Vec<u64> = (0..width).map(|_| rng.gen()).collect();
            let sign = if spans_negative && rng.gen() {
                Sign::Negative
            } else {
                Sign::NonNegative
            };

            let candidate = BigInt::from_parts(sign, Magnitude::from_blocks(&blocks));

            if candidate >= self.low
                && (candidate < self.high || (self.inclusive && candidate == self.high))
            {
                return candidate;
            }
        }
    }
}

impl SampleUniform for BigInt {
    type Sampler = BigIntSampler;
}
