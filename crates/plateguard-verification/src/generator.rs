use rand::Rng;

use plateguard_core::traits::ICodeGenerator;

/// Uniform random decimal digits from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDigits;

impl ICodeGenerator for RandomDigits {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
