use crate::{Region, User};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionShare {
    pub region: Region,
    pub name: &'static str,
    pub count: usize,
    /// Whole-number share of the overall user count
    pub percentage: u32,
}

/// One bucket per assignable region, in [`Region::ALL`] order.
///
/// Percentages are taken against the overall user count, so users without a
/// region lower every share. An empty list yields zero everywhere.
pub fn regional_distribution(users: &[User]) -> Vec<RegionShare> {
    let total = users.len();

    Region::ALL
        .iter()
        .map(|&region| {
            let count = users.iter().filter(|u| u.region == region).count();
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u32
            };

            RegionShare {
                region,
                name: region.display_name(),
                count,
                percentage,
            }
        })
        .collect()
}
