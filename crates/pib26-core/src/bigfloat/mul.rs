use crate::bigint::BigInt;
use crate::error::ArithError;
use crate::sign::Sign;
use crate::strategy::Multiplier;

use super::{to_isize, BigFloat};

impl BigFloat<'_> {
    /// Keep the top `total_len` digits of the strategy's last product.
    ///
    /// `exp` is the exponent the product has when its top digit sits at
    /// position `full_len - 2`; a full-length product moves it up by one.
    fn take_product(&mut self, strategy: &dyn Multiplier, exp: isize, full_len: usize, sign: Sign) {
        let total = self.total_len();
        let prod_len = strategy.product_len();
        let window = self.window_mut();
        if prod_len <= total {
            let excess = total - prod_len;
            strategy.product_digits(&mut window[excess..], 0);
            window[..excess].fill(0);
        } else {
            strategy.product_digits(window, prod_len - total);
        }
        self.exp = exp + isize::from(prod_len == full_len);
        self.sign = sign;
        self.zero_if_empty();
    }

    /// `self = a * b`, keeping the most significant digits.
    pub fn mul(
        &mut self,
        a: &BigFloat<'_>,
        b: &BigFloat<'_>,
        strategy: &mut dyn Multiplier,
    ) -> Result<(), ArithError> {
        strategy.mul_digits(a.digits(), b.digits())?;
        self.take_product(
            strategy,
            a.exp + b.exp,
            a.total_len() + b.total_len(),
            a.sign * b.sign,
        );
        Ok(())
    }

    /// `self *= b`.
    pub fn mul_assign(
        &mut self,
        b: &BigFloat<'_>,
        strategy: &mut dyn Multiplier,
    ) -> Result<(), ArithError> {
        strategy.mul_digits(self.digits(), b.digits())?;
        let exp = self.exp + b.exp;
        let full_len = self.total_len() + b.total_len();
        let sign = self.sign * b.sign;
        self.take_product(strategy, exp, full_len, sign);
        Ok(())
    }

    /// `self = a * a`.
    pub fn square(&mut self, a: &BigFloat<'_>, strategy: &mut dyn Multiplier) -> Result<(), ArithError> {
        strategy.square_digits(a.digits())?;
        self.take_product(strategy, 2 * a.exp, 2 * a.total_len(), Sign::Positive);
        Ok(())
    }

    /// `self *= self`.
    pub fn square_assign(&mut self, strategy: &mut dyn Multiplier) -> Result<(), ArithError> {
        strategy.square_digits(self.digits())?;
        let exp = 2 * self.exp;
        let full_len = 2 * self.total_len();
        self.take_product(strategy, exp, full_len, Sign::Positive);
        Ok(())
    }

    /// `self = a * b` for an integer `b`.
    pub fn mul_int(
        &mut self,
        a: &BigFloat<'_>,
        b: &BigInt<'_>,
        strategy: &mut dyn Multiplier,
    ) -> Result<(), ArithError> {
        if b.is_zero() {
            self.set_zero();
            return Ok(());
        }
        strategy.mul_digits(a.digits(), b.digits())?;
        self.take_product(
            strategy,
            a.exp + to_isize(b.used()) - 1,
            a.total_len() + b.used(),
            a.sign * b.sign(),
        );
        Ok(())
    }
}
