use crate::models::errors::{GameError, GameResult};
use crate::models::events::Event;
use crate::models::galaxy::Galaxy;

/// Fire phasers with `amount` units of energy.
///
/// The full amount is spent whatever happens. It is split evenly across
/// the Klingons present when firing starts; each then takes its share
/// plus a random bonus of up to the share again. Klingons are resolved
/// from the last-placed to the first.
pub fn fire_phasers(galaxy: &mut Galaxy, amount: i32) -> GameResult<Vec<Event>> {
    if amount <= 0 {
        return Err(GameError::InputRejected(format!(
            "phaser energy must be positive, got {}",
            amount
        )));
    }
    galaxy.enterprise_mut().consume_energy(amount)?;

    let count = galaxy.sector_map().klingons.len() as i32;
    if count == 0 {
        return Ok(vec![Event::PhaserWasted]);
    }

    let share = (amount / count).max(1);
    let mut events = Vec::with_capacity(count as usize);

    for i in (0..count as usize).rev() {
        let hit = share + galaxy.dice_mut().below(share + 1);
        let klingon = &mut galaxy.sector_map_mut().klingons[i];
        klingon.hp -= hit;
        let sector = klingon.sector;
        let destroyed = !klingon.is_alive();

        if destroyed {
            galaxy.destroy_klingon(sector);
        }
        events.push(Event::PhaserHit {
            sector,
            units: hit,
            destroyed,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::Resource;
    use crate::models::galaxy::empty_scenario;
    use crate::models::position::SectorPosition;

    /// Helper: ship at (4,4) facing the given Klingons.
    fn setup_combat_scenario(seed: u64, klingons: &[(SectorPosition, i32)]) -> Galaxy {
        let mut galaxy = empty_scenario(seed, SectorPosition::new(4, 4));
        for (pos, hp) in klingons {
            galaxy.place_klingon(*pos, *hp);
        }
        galaxy
    }

    #[test]
    fn two_weak_klingons_both_destroyed() {
        let mut galaxy = setup_combat_scenario(
            1,
            &[
                (SectorPosition::new(0, 0), 50),
                (SectorPosition::new(7, 7), 50),
            ],
        );
        galaxy.enterprise_mut().energy = 4000;
        let total = galaxy.total_klingons();

        let events = fire_phasers(&mut galaxy, 3000).unwrap();

        assert_eq!(galaxy.enterprise().energy, 1000);
        assert_eq!(galaxy.total_klingons(), total - 2);
        assert!(galaxy.sector_map().klingons.is_empty());
        assert_eq!(events.len(), 2);
        for event in &events {
            match event {
                Event::PhaserHit {
                    units, destroyed, ..
                } => {
                    assert!((1500..=3000).contains(units), "hit {}", units);
                    assert!(destroyed);
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn resolves_last_placed_klingon_first() {
        let first = SectorPosition::new(1, 1);
        let last = SectorPosition::new(6, 6);
        let mut galaxy = setup_combat_scenario(2, &[(first, 500), (last, 500)]);

        let events = fire_phasers(&mut galaxy, 10).unwrap();
        let order: Vec<SectorPosition> = events
            .iter()
            .filter_map(|e| match e {
                Event::PhaserHit { sector, .. } => Some(*sector),
                _ => None,
            })
            .collect();
        assert_eq!(order, vec![last, first]);
    }

    #[test]
    fn survivors_keep_reduced_hit_points() {
        let pos = SectorPosition::new(2, 2);
        let mut galaxy = setup_combat_scenario(3, &[(pos, 500)]);

        let events = fire_phasers(&mut galaxy, 100).unwrap();
        let units = match events[0] {
            Event::PhaserHit {
                units,
                destroyed: false,
                ..
            } => units,
            ref other => panic!("unexpected {:?}", other),
        };
        assert!((100..=200).contains(&units));
        assert_eq!(galaxy.sector_map().klingons[0].hp, 500 - units);
    }

    #[test]
    fn tiny_volley_still_hits_for_at_least_one() {
        let mut galaxy = setup_combat_scenario(
            4,
            &[
                (SectorPosition::new(0, 1), 300),
                (SectorPosition::new(0, 2), 300),
                (SectorPosition::new(0, 3), 300),
            ],
        );
        let events = fire_phasers(&mut galaxy, 1).unwrap();
        for event in events {
            if let Event::PhaserHit { units, .. } = event {
                assert!((1..=2).contains(&units));
            }
        }
        assert_eq!(galaxy.enterprise().energy, 4000 - 1);
    }

    #[test]
    fn empty_quadrant_wastes_the_shot() {
        let mut galaxy = setup_combat_scenario(5, &[]);
        let events = fire_phasers(&mut galaxy, 200).unwrap();
        assert_eq!(events, vec![Event::PhaserWasted]);
        assert_eq!(galaxy.enterprise().energy, 3800);
    }

    #[test]
    fn overdraw_is_refused_without_spending() {
        let mut galaxy = setup_combat_scenario(6, &[(SectorPosition::new(1, 1), 200)]);
        galaxy.enterprise_mut().energy = 100;
        let err = fire_phasers(&mut galaxy, 101).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientResources {
                resource: Resource::Energy,
                ..
            }
        ));
        assert_eq!(galaxy.enterprise().energy, 100);
        assert_eq!(galaxy.sector_map().klingons[0].hp, 200);
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut galaxy = setup_combat_scenario(7, &[]);
        assert!(matches!(
            fire_phasers(&mut galaxy, 0),
            Err(GameError::InputRejected(_))
        ));
        assert_eq!(galaxy.enterprise().energy, 4000);
    }
}
