pub mod kappa;
pub mod normal;
pub mod wilson;

pub fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mod.rs"]
mod tests;
