use rand::prelude::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarPoint {
    pub position: [f32; 3],
}

/// `count` points uniformly distributed in an axis-aligned cube of side
/// `side` centered at the origin.
pub fn generate_starfield<R: Rng>(rng: &mut R, count: usize, side: f32) -> Vec<StarPoint> {
    let mut coord = || (rng.gen::<f32>() - 0.5) * side;
    (0..count)
        .map(|_| StarPoint {
            position: [coord(), coord(), coord()],
        })
        .collect()
}

/// Deterministic starfield for a given seed.
pub fn seeded_starfield(seed: u64, count: usize, side: f32) -> Vec<StarPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_starfield(&mut rng, count, side)
}
