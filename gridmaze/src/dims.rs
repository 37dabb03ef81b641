use std::ops::{Add, AddAssign, Sub, SubAssign};

use paste::paste;

/// Position or offset on the grid, `x` grows east and `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
}

macro_rules! impl_op {
    ($trait:ident, $op:ident) => {
        impl $trait for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: Dims) -> Dims {
                Dims(self.0.$op(other.0), self.1.$op(other.1))
            }
        }

        impl $trait<i32> for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: i32) -> Dims {
                Dims(self.0.$op(other), self.1.$op(other))
            }
        }

        paste! {
            impl [<$trait Assign>] for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Dims) {
                    *self = self.$op(other);
                }
            }

            impl [<$trait Assign>]<i32> for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: i32) {
                    *self = self.$op(other);
                }
            }
        }
    };
}

impl_op!(Add, add);
impl_op!(Sub, sub);
