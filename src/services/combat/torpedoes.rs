use crate::models::constants::{SectorContent, STAR_DESTROY_ODDS, STAR_ODDS_OUT_OF};
use crate::models::errors::GameResult;
use crate::models::events::Event;
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Heading;
use crate::models::position::SectorPosition;
use crate::services::navigation::Trajectory;

/// Resolve a torpedo reaching an occupied cell. Always ends the flight.
fn resolve_hit(galaxy: &mut Galaxy, pos: SectorPosition, content: SectorContent, events: &mut Vec<Event>) {
    match content {
        SectorContent::Klingon => {
            galaxy.destroy_klingon(pos);
            events.push(Event::KlingonDestroyed { sector: pos });
        }
        SectorContent::Starbase => {
            galaxy.destroy_starbase(pos);
            events.push(Event::StarbaseDestroyed { sector: pos });
        }
        SectorContent::Star => {
            events.push(Event::StarHit { sector: pos });
            if galaxy.dice_mut().below(STAR_ODDS_OUT_OF) < STAR_DESTROY_ODDS {
                galaxy.destroy_star(pos);
                events.push(Event::StarDestroyed { sector: pos });
            }
        }
        SectorContent::Enterprise | SectorContent::Empty => {}
    }
}

/// Launch one photon torpedo along `heading`.
///
/// The torpedo never leaves the loaded quadrant. Each new cell it enters is
/// reported as a track point, and the first occupied cell other than the
/// ship's own stops it.
pub fn fire_torpedo(galaxy: &mut Galaxy, heading: Heading) -> GameResult<Vec<Event>> {
    galaxy.enterprise_mut().consume_torpedo()?;

    let origin = galaxy.enterprise().sector;
    let mut trajectory = Trajectory::from_cell(origin.x, origin.y, heading);
    let mut last_track: Option<SectorPosition> = None;
    let mut events = Vec::new();

    loop {
        let (x, y) = trajectory.advance();
        let pos = SectorPosition::new(x, y);
        if !pos.is_valid() {
            events.push(Event::TorpedoMissed);
            break;
        }
        if pos == origin {
            continue;
        }
        if last_track != Some(pos) {
            events.push(Event::TorpedoTrack { sector: pos });
            last_track = Some(pos);
        }

        let content = galaxy.sector_map().get(pos);
        if content != SectorContent::Empty {
            resolve_hit(galaxy, pos, content, &mut events);
            break;
        }
    }

    tracing::debug!(heading = heading.value(), torpedoes = galaxy.enterprise().torpedoes, "torpedo fired");
    Ok(events)
}
