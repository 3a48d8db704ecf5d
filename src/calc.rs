use primitive_types::U512;
use std::fmt;

/// The fixed exponents shown by the calculator, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exponent {
    Square,
    Cube,
    FifthPower,
}

impl Exponent {
    pub const ALL: [Exponent; 3] = [Exponent::Square, Exponent::Cube, Exponent::FifthPower];

    pub fn value(self) -> u32 {
        match self {
            Exponent::Square => 2,
            Exponent::Cube => 3,
            Exponent::FifthPower => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Exponent::Square => "square",
            Exponent::Cube => "cube",
            Exponent::FifthPower => "fifth_power",
        }
    }
}

/// An exact signed power of an `i64`.
///
/// The largest magnitude is `|i64::MIN|^5 = 2^315`, so a 512 bit magnitude never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BigPower {
    negative: bool,
    magnitude: U512,
}

impl BigPower {
    fn new(negative: bool, magnitude: U512) -> BigPower {
        BigPower {
            // There is no negative zero.
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> U512 {
        self.magnitude
    }

    /// Returns the value as an `i128` if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        if self.magnitude.bits() > 127 {
            return None;
        }
        let value = self.magnitude.low_u128() as i128;
        Some(if self.negative { -value } else { value })
    }
}

impl fmt::Display for BigPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Powers {
    pub n: i64,
    pub square: BigPower,
    pub cube: BigPower,
    pub fifth_power: BigPower,
}

impl Powers {
    pub fn get(&self, exponent: Exponent) -> &BigPower {
        match exponent {
            Exponent::Square => &self.square,
            Exponent::Cube => &self.cube,
            Exponent::FifthPower => &self.fifth_power,
        }
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = (Exponent, &BigPower)> {
        Exponent::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Computes the square, cube and fifth power of `n`.
pub fn calculate(n: i64) -> Powers {
    let powers = Powers {
        n,
        square: power(n, Exponent::Square),
        cube: power(n, Exponent::Cube),
        fifth_power: power(n, Exponent::FifthPower),
    };
    tracing::trace!(n, fifth_power = %powers.fifth_power, "calculated powers");
    powers
}

pub fn power(n: i64, exponent: Exponent) -> BigPower {
    let exp = exponent.value();
    let magnitude = pow(U512::from(n.unsigned_abs()), exp);
    BigPower::new(n < 0 && exp % 2 == 1, magnitude)
}

fn pow(base: U512, mut exp: u32) -> U512 {
    let mut out = U512::one();
    while exp > 0 {
        out = out * base;
        exp -= 1;
    }
    out
}
