//! Cluster hits table
//!
//! Converts one 2d6 roll into the number of projectiles from a volley that
//! strike the target. Columns are rack sizes, rows are roll results 2..=12.

const CLUSTER_TABLE: &[(u32, [u32; 11])] = &[
    (2, [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]),
    (3, [1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3]),
    (4, [1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4]),
    (5, [1, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5]),
    (6, [2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6]),
    (10, [3, 3, 4, 6, 6, 6, 6, 8, 8, 10, 10]),
    (15, [5, 5, 6, 9, 9, 9, 9, 12, 12, 15, 15]),
    (20, [6, 6, 9, 12, 12, 12, 12, 16, 16, 20, 20]),
];

/// Does the table have a column for this rack size? Size 1 always hits whole.
pub fn supports(rack_size: u32) -> bool {
    rack_size == 1 || CLUSTER_TABLE.iter().any(|(size, _)| *size == rack_size)
}

/// Projectiles that hit for a rack of `rack_size` on a 2d6 `roll`
///
/// Returns `None` for an unsupported rack size or a roll outside 2..=12.
pub fn hits(rack_size: u32, roll: u32) -> Option<u32> {
    if !(2..=12).contains(&roll) {
        return None;
    }
    if rack_size == 1 {
        return Some(1);
    }
    CLUSTER_TABLE
        .iter()
        .find(|(size, _)| *size == rack_size)
        .map(|(_, column)| column[(roll - 2) as usize])
}
