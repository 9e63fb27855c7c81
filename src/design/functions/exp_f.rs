/// Truth function for the exp tables: `e^x` in f64.
#[inline]
pub fn exp_f(x: f64) -> f64 {
    x.exp()
}
