use crate::engine::components::transform::Transform;
use crate::engine::systems::keyboard_input_system::TableControls;
use crate::engine::utils::math::Vec3;

/// Table speed in units per second.
pub const TABLE_SPEED: f32 = 1.0;

/// Allowed range of the table offset on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableBounds {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl TableBounds {
    pub fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (x.clamp(self.min[0], self.max[0]), z.clamp(self.min[1], self.max[1]))
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        (self.min[0]..=self.max[0]).contains(&x) && (self.min[1]..=self.max[1]).contains(&z)
    }
}

/// Offsets the table may take while the phone footprint stays on the table top.
///
/// If the phone is wider than the table on an axis the range collapses to the
/// midpoint of the two limits.
pub fn table_offset_bounds(table_center: Vec3, table_size: Vec3, phone_center: Vec3, phone_size: Vec3) -> TableBounds {
    let mut min = [0.0; 2];
    let mut max = [0.0; 2];
    for (slot, axis) in [0usize, 2].into_iter().enumerate() {
        let table_half = table_size[axis] * 0.5;
        let phone_half = phone_size[axis] * 0.5;
        let lo = phone_center[axis] + phone_half - (table_center[axis] + table_half);
        let hi = phone_center[axis] - phone_half - (table_center[axis] - table_half);
        if lo > hi {
            let mid = (lo + hi) * 0.5;
            min[slot] = mid;
            max[slot] = mid;
        } else {
            min[slot] = lo;
            max[slot] = hi;
        }
    }
    TableBounds { min, max }
}

#[derive(Debug)]
pub struct MovementSystem;

impl MovementSystem {
    /// Moves the table offset by one frame of input, then clamps it.
    pub fn move_table(table: &mut Transform, controls: &TableControls, bounds: &TableBounds, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let step = TABLE_SPEED * dt;
        let [x, y, z] = table.get_position();
        let (x, z) = bounds.clamp(x + controls.x * step, z + controls.z * step);
        table.set_position(x, y, z);
    }
}
