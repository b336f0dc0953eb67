/// Static background stars, generated once from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GLYPHS: [char; 3] = ['.', '·', '*'];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// `count` stars scattered over the world.  The same seed always gives the
    /// same sky.
    pub fn generate(count: usize, world_width: f32, world_height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(count, world_width, world_height, &mut rng)
    }

    pub fn generate_with(
        count: usize,
        world_width: f32,
        world_height: f32,
        rng: &mut impl Rng,
    ) -> Self {
        if world_width <= 0.0 || world_height <= 0.0 {
            return Starfield::default();
        }
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..world_width),
                y: rng.gen_range(0.0..world_height),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            })
            .collect();
        Starfield { stars }
    }
}
