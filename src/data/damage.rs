//! Base damage matrix
//!
//! Percentage damage one full-strength unit deals to another before any
//! modifier is applied. Zero means the attacker cannot damage that kind at
//! all. Rows are attackers, columns defenders, both in `UnitKind` order.

use super::unit::UnitKind;

#[rustfmt::skip]
static DAMAGE_MATRIX: [[u8; 25]; 25] = [
    [45, 50, 50, 120, 0, 0, 120, 75, 0, 0, 65, 105, 0, 10, 105, 1, 55, 5, 25, 60, 55, 75, 0, 120, 25],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [75, 70, 75, 0, 40, 55, 0, 0, 45, 65, 0, 90, 55, 45, 85, 15, 80, 40, 70, 80, 80, 0, 60, 0, 70],
    [25, 60, 65, 65, 25, 25, 0, 0, 25, 55, 0, 75, 25, 25, 75, 10, 65, 20, 55, 55, 65, 0, 25, 95, 55],
    [85, 80, 80, 0, 50, 95, 0, 0, 60, 95, 0, 95, 95, 55, 90, 25, 90, 50, 80, 90, 85, 0, 95, 0, 80],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [95, 105, 105, 0, 75, 95, 0, 0, 75, 85, 0, 110, 95, 95, 110, 35, 105, 90, 105, 105, 105, 0, 95, 0, 105],
    [0, 0, 0, 115, 0, 0, 120, 100, 0, 0, 100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 0, 115, 0],
    [0, 0, 0, 115, 0, 25, 120, 65, 5, 0, 55, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 90, 115, 0],
    [0, 0, 0, 100, 0, 0, 120, 100, 0, 0, 55, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 85, 0, 100, 0],
    [5, 14, 15, 7, 0, 0, 0, 0, 0, 0, 0, 55, 0, 1, 45, 1, 26, 1, 5, 12, 25, 0, 0, 30, 5],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [105, 105, 105, 12, 10, 35, 0, 0, 10, 45, 0, 105, 35, 55, 95, 25, 105, 45, 85, 105, 105, 0, 10, 45, 85],
    [65, 75, 70, 9, 0, 0, 0, 0, 0, 0, 0, 65, 0, 15, 55, 5, 85, 15, 55, 85, 85, 0, 0, 35, 55],
    [195, 195, 195, 22, 45, 105, 0, 0, 45, 65, 0, 135, 75, 125, 125, 65, 195, 115, 180, 195, 195, 0, 45, 55, 180],
    [0, 0, 0, 120, 0, 0, 120, 100, 0, 0, 100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 0, 120, 0],
    [115, 125, 115, 22, 15, 40, 0, 0, 15, 50, 0, 125, 50, 75, 115, 35, 125, 55, 105, 125, 125, 0, 15, 55, 105],
    [85, 80, 80, 105, 55, 60, 120, 75, 60, 85, 65, 95, 60, 55, 90, 25, 90, 50, 80, 90, 85, 75, 85, 105, 80],
    [4, 45, 45, 12, 0, 0, 0, 0, 0, 0, 0, 70, 0, 1, 65, 1, 28, 1, 6, 35, 55, 0, 0, 35, 6],
    [85, 80, 80, 0, 55, 60, 0, 0, 60, 85, 0, 95, 60, 55, 90, 25, 90, 50, 80, 90, 85, 0, 85, 0, 80],
    [50, 85, 75, 85, 45, 65, 120, 70, 45, 35, 45, 90, 65, 70, 90, 15, 85, 60, 80, 85, 85, 55, 55, 95, 75],
    [0, 0, 0, 0, 55, 95, 0, 0, 75, 25, 0, 0, 95, 0, 0, 0, 0, 0, 0, 0, 0, 0, 55, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [65, 75, 70, 10, 1, 10, 0, 0, 1, 5, 0, 75, 10, 15, 70, 10, 85, 15, 55, 85, 85, 0, 1, 40, 55],
];

/// Base damage percentage `attacker` deals to `defender`. 0 = cannot damage.
pub fn base_damage(attacker: UnitKind, defender: UnitKind) -> u32 {
    u32::from(DAMAGE_MATRIX[attacker as usize][defender as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_matchups() {
        assert_eq!(base_damage(UnitKind::Tank, UnitKind::Infantry), 75);
        assert_eq!(base_damage(UnitKind::Infantry, UnitKind::Tank), 5);
        assert_eq!(base_damage(UnitKind::MegaTank, UnitKind::AntiAir), 195);
    }

    #[test]
    fn test_transports_cannot_attack() {
        for defender in UnitKind::ALL {
            assert_eq!(base_damage(UnitKind::Apc, defender), 0);
            assert_eq!(base_damage(UnitKind::TCopter, defender), 0);
            assert_eq!(base_damage(UnitKind::Lander, defender), 0);
            assert_eq!(base_damage(UnitKind::BlackBoat, defender), 0);
            assert_eq!(base_damage(UnitKind::BlackBomb, defender), 0);
        }
    }

    #[test]
    fn test_immunity_is_zero() {
        // Tanks cannot reach bombers.
        assert_eq!(base_damage(UnitKind::Tank, UnitKind::Bomber), 0);
        // Fighters cannot hit ground units.
        assert_eq!(base_damage(UnitKind::Fighter, UnitKind::Tank), 0);
    }
}
