/// A single kernel tap.
///
/// The weight of the tap is `1 / divisor`; a tap contributes `value / divisor` to the output,
/// with integer division truncating toward zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tap {
    /// Row offset from the center.
    pub dy: isize,
    /// Column offset from the center.
    pub dx: isize,
    /// Divisor applied to the source value.
    pub divisor: i32,
}

/// A square convolution kernel made of three weight tiers.
///
/// The taps are stored in accumulation order: the center tap, then every tier-two tap in
/// row-major order, then every tier-three tap in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    radius: usize,
    taps: Vec<Tap>,
}

impl Kernel {
    /// Create the 3x3 blur kernel.
    ///
    /// The center weighs 1/4, the four orthogonal neighbours 1/8 and the four diagonals 1/16.
    pub fn blur() -> Self {
        Self::from_tiers(1, [4, 8, 16], |dy, dx| dy == 0 || dx == 0)
    }

    /// Create the 5x5 sharpen kernel.
    ///
    /// The center weighs 1, the surrounding 3x3 ring 1/4 and the outer ring -1/8.
    pub fn sharpen() -> Self {
        Self::from_tiers(2, [1, 4, -8], |dy, dx| dy.abs() <= 1 && dx.abs() <= 1)
    }

    fn from_tiers(
        radius: usize,
        divisors: [i32; 3],
        is_tier_two: impl Fn(isize, isize) -> bool,
    ) -> Self {
        let r = radius as isize;
        let side = 2 * radius + 1;
        let mut taps = Vec::with_capacity(side * side);

        taps.push(Tap {
            dy: 0,
            dx: 0,
            divisor: divisors[0],
        });

        let offsets = || {
            (-r..=r)
                .flat_map(move |dy| (-r..=r).map(move |dx| (dy, dx)))
                .filter(|&(dy, dx)| dy != 0 || dx != 0)
        };

        for (dy, dx) in offsets().filter(|&(dy, dx)| is_tier_two(dy, dx)) {
            taps.push(Tap {
                dy,
                dx,
                divisor: divisors[1],
            });
        }

        for (dy, dx) in offsets().filter(|&(dy, dx)| !is_tier_two(dy, dx)) {
            taps.push(Tap {
                dy,
                dx,
                divisor: divisors[2],
            });
        }

        Self { radius, taps }
    }

    /// Get the radius of the kernel.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Get the side length of the kernel.
    pub fn size(&self) -> usize {
        2 * self.radius + 1
    }

    /// Get the taps in accumulation order.
    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    /// Get the weight of each tap as a float.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.taps.iter().map(|tap| 1.0 / tap.divisor as f64)
    }
}
