use rand::Rng;

pub trait GetRandom {
    type Item;

    fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'_ Self::Item>;
}

impl<T> GetRandom for [T] {
    type Item = T;

    fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'_ Self::Item> {
        match self.len() {
            0 => None,
            len => self.get(rng.gen_range(0..len)),
        }
    }
}
