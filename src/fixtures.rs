//! Catalogs shared by the unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Player, Position};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Club for squad-fixture player `id`: two consecutive IDs per club.
fn paired_club(id: u32) -> String {
    format!("C{}", (id + 1) / 2)
}

fn layout(id: u32) -> Position {
    match id {
        1..=2 => Position::Goalkeeper,
        3..=7 => Position::Defender,
        8..=12 => Position::Midfielder,
        _ => Position::Forward,
    }
}

/// Exactly fifteen players meeting every quota, costing exactly 100.0,
/// with at most two per club. No other squad exists in this catalog.
///
/// IDs 1-2 are goalkeepers, 3-7 defenders, 8-12 midfielders and 13-15
/// forwards.
pub fn exact_squad() -> Vec<Player> {
    let points = [
        120, 90, // GK
        150, 140, 130, 100, 60, // DEF
        200, 180, 110, 95, 50, // MID
        190, 105, 70, // FW
    ];
    let prices = [
        5.0, 4.0, // GK
        6.0, 6.0, 6.0, 6.0, 6.0, // DEF
        8.0, 8.0, 8.0, 8.0, 8.0, // MID
        7.0, 7.0, 7.0, // FW
    ];
    (1..=15u32)
        .map(|id| {
            let i = (id - 1) as usize;
            Player::new(
                id,
                layout(id),
                format!("p{id}"),
                paired_club(id),
                points[i],
                prices[i],
            )
        })
        .collect()
}

/// Fifteen interchangeable players: same points, same price.
pub fn uniform_squad() -> Vec<Player> {
    (1..=15u32)
        .map(|id| Player::new(id, layout(id), format!("u{id}"), paired_club(id), 100, 6.0))
        .collect()
}

/// A league-sized random catalog with twenty clubs.
///
/// Roughly the bottom 40% of every position are fringe players priced at
/// 4.0 or 4.5 and scoring under 50 points, so any construction can always
/// finish the squad cheaply.
pub fn synthetic_catalog(seed: u64) -> Vec<Player> {
    let mut rng = rng(seed);
    let sizes = [
        (Position::Goalkeeper, 16),
        (Position::Defender, 50),
        (Position::Midfielder, 50),
        (Position::Forward, 30),
    ];

    let mut players = Vec::new();
    let mut id = 1;
    for (position, count) in sizes {
        let regulars = count * 3 / 5;
        for n in 0..count {
            let (points, price) = if n < regulars {
                let points: i32 = rng.random_range(60..260);
                let noise: f64 = rng.random_range(-1.0..1.0);
                let raw = 4.0 + f64::from(points) / 30.0 + noise;
                (points, (raw.clamp(4.5, 13.0) * 2.0).round() / 2.0)
            } else {
                let price = if rng.random_bool(0.5) { 4.0 } else { 4.5 };
                (rng.random_range(0..50), price)
            };
            let club = format!("club{}", rng.random_range(0..20));
            players.push(Player::new(id, position, format!("s{id}"), club, points, price));
            id += 1;
        }
    }
    players
}
