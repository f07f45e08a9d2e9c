use crate::game_engine::{DefeatReason, GameState, MissionBriefing};
use crate::io::OutputWriter;
use crate::models::enterprise::DeviceDamage;
use crate::models::events::{Event, TurnReport};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantData;
use crate::services::computer::{GalaxyMap, StatusReport};
use crate::services::scan::{LongRangeScan, SectorGrid};

/// Coordinates are stored 0-based and shown 1-based.
fn sector_label(pos: SectorPosition) -> String {
    format!("{},{}", pos.x + 1, pos.y + 1)
}

fn position_line(quadrant: QuadrantPosition, sector: SectorPosition) -> String {
    format!(
        "Q-{},{}  S-{},{}",
        quadrant.x + 1,
        quadrant.y + 1,
        sector.x + 1,
        sector.y + 1
    )
}

/// Klingons, starbases and stars as three digits.
fn kbs(data: &QuadrantData) -> String {
    format!("{}{}{}", data.klingons, data.starbases, data.stars)
}

fn damage_line(damage: &DeviceDamage) -> String {
    format!(
        "{} DAMAGED, {} STARDATES ESTIMATED FOR REPAIR",
        damage.device.name(),
        damage.repair_time
    )
}

pub struct SessionPresenter;

impl SessionPresenter {
    pub fn show_briefing(briefing: &MissionBriefing, output: &mut dyn OutputWriter) {
        output.writeln(&format!("STARDATE {}  YOUR MISSION IS ...", briefing.stardate));
        output.writeln("");
        output.writeln(&format!(
            "ENTERPRISE IN {}",
            position_line(briefing.quadrant, briefing.sector)
        ));
        output.writeln(&format!(
            "TO DESTROY {} KLINGONS IN {} STARDATES.",
            briefing.klingons, briefing.stardates
        ));
        output.writeln(&format!("THERE ARE {} STARBASES.", briefing.starbases));
    }

    pub fn show_game_over(state: &GameState, output: &mut dyn OutputWriter) {
        match state {
            GameState::Playing => {}
            GameState::Victory => {
                output.writeln("");
                output.writeln("MISSION ACCOMPLISHED.");
            }
            GameState::Defeat {
                reason: DefeatReason::TimeExpired,
            } => output.writeln("IT'S TOO LATE, THE FEDERATION HAS BEEN CONQUERED."),
            GameState::Defeat {
                reason: DefeatReason::ShipDestroyed,
            } => output.writeln("ENTERPRISE DESTROYED"),
        }
    }
}

pub struct EventPresenter;

impl EventPresenter {
    pub fn show(events: &[Event], output: &mut dyn OutputWriter) {
        for event in events {
            Self::show_event(event, output);
        }
    }

    fn show_event(event: &Event, output: &mut dyn OutputWriter) {
        match event {
            Event::ShipPositioned { quadrant, sector } => {
                output.writeln("");
                output.writeln(&format!("ENTERPRISE IN {}", position_line(*quadrant, *sector)));
            }
            Event::GalaxyExcursion => {
                output.writeln("YOU WANDERED OUTSIDE THE GALAXY");
                output.writeln("ON BOARD COMPUTER TAKES OVER, AND SAVED YOUR LIFE");
            }
            Event::EmergencyStop { .. } => {
                output.writeln("EMERGENCY STOP");
                output.writeln("SPOCK: TO ERR IS HUMAN.");
            }
            Event::TorpedoTrack { sector } => {
                output.writeln(&format!("TORPEDO TRACK {}", sector_label(*sector)))
            }
            Event::TorpedoMissed => output.writeln("...MISSED"),
            Event::KlingonDestroyed { .. } => output.writeln("KLINGON DESTROYED"),
            Event::StarbaseDestroyed { .. } => output.writeln("STARBASE DESTROYED"),
            Event::StarHit { .. } => output.writeln("HIT A STAR"),
            Event::StarDestroyed { .. } => output.writeln("STAR DESTROYED"),
            Event::PhaserWasted => output.writeln("PHASER FIRED AT EMPTY SPACE."),
            Event::PhaserHit {
                sector,
                units,
                destroyed,
            } => {
                output.writeln(&format!(
                    "{} UNITS HIT KLINGON AT S-{}",
                    units,
                    sector_label(*sector)
                ));
                if *destroyed {
                    output.writeln("DESTROYED");
                }
            }
            Event::KlingonsAttack => {
                output.writeln("");
                output.writeln("KLINGON ATTACK");
            }
            Event::StarbaseProtects => output.writeln("STARBASE PROTECTS ENTERPRISE"),
            Event::KlingonFire { sector, units } => output.writeln(&format!(
                "{} UNITS HIT FROM KLINGON AT S-{}",
                units,
                sector_label(*sector)
            )),
            Event::EnergyRemaining { energy, .. } => {
                output.writeln(&format!("{} UNITS OF ENERGY LEFT.", energy))
            }
            Event::ShipDestroyed { .. } => output.writeln("BANG"),
            Event::DeviceDamaged {
                device,
                repair_time,
            } => {
                output.writeln("");
                output.writeln("DAMAGE REPORT:");
                output.writeln(&damage_line(&DeviceDamage {
                    device: *device,
                    repair_time: *repair_time,
                }));
            }
        }
    }

    pub fn show_turn(report: &TurnReport, output: &mut dyn OutputWriter) {
        Self::show(&report.events(), output);
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn show(report: &StatusReport, output: &mut dyn OutputWriter) {
        output.writeln("STATUS REPORT");
        output.writeln(&format!("STARDATE {}", report.stardate));
        output.writeln(&format!("TIME LEFT {}", report.stardates_left));
        output.writeln(&format!("CONDITION {}", report.condition.label()));
        output.writeln(&format!(
            "POSITION {}",
            position_line(report.quadrant, report.sector)
        ));
        output.writeln(&format!("ENERGY {}", report.energy));
        output.writeln(&format!("TORPEDOES {}", report.torpedoes));
        output.writeln(&format!("KLINGONS LEFT {}", report.klingons_left));
        output.writeln(&format!("STARBASES {}", report.starbases_left));
        for damage in &report.damage {
            output.writeln(&damage_line(damage));
        }
    }
}

pub struct ScanPresenter;

impl ScanPresenter {
    pub fn show_short_range(grid: &SectorGrid, output: &mut dyn OutputWriter) {
        output.writeln("");
        for (y, row) in grid.rows.iter().enumerate() {
            let mut line = format!("{} ", y + 1);
            for cell in row {
                line.push(cell.symbol());
                line.push(' ');
            }
            output.writeln(&line);
        }
        let mut footer = String::from("  ");
        for x in 0..grid.rows.len() {
            footer.push_str(&format!("{} ", x + 1));
        }
        output.writeln(&footer);
    }

    pub fn show_long_range(scan: &LongRangeScan, output: &mut dyn OutputWriter) {
        output.writeln("");
        for row in &scan.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Some(data) => format!(" {} ", kbs(data)),
                    None => " *** ".to_string(),
                })
                .collect();
            output.writeln(&line);
        }
    }

    pub fn show_galaxy_map(map: &GalaxyMap, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("GALAXY MAP (KBS)");
        for row in &map.quadrants {
            let line: String = row.iter().map(|data| format!("{} ", kbs(data))).collect();
            output.writeln(&line);
        }
    }
}
