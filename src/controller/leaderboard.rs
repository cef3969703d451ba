//! Final standings and the results report.
//!
//! Players are ranked by score, highest first. The sort is stable, so tied
//! players keep their turn order. Ranks are positions (1, 2, 3, ...), not
//! shared between ties.

use serde::{Deserialize, Serialize};

use crate::core::config::{GameMode, PlayStyle};
use crate::core::player::Player;

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub player: Player,
    /// Set on the first row of a competition.
    pub winner: bool,
}

/// Ranked result of a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub style: PlayStyle,
    pub mode: GameMode,
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    /// Rank players by score, descending, keeping turn order among ties.
    #[must_use]
    pub fn rank(style: PlayStyle, mode: GameMode, mut players: Vec<Player>) -> Self {
        sort_by_score(&mut players);

        let standings = players
            .into_iter()
            .enumerate()
            .map(|(i, player)| Standing {
                rank: i + 1,
                player,
                winner: i == 0 && style == PlayStyle::Competition,
            })
            .collect();

        Self {
            style,
            mode,
            standings,
        }
    }

    /// The flagged winner, if this was a competition.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.standings
            .iter()
            .find(|s| s.winner)
            .map(|s| &s.player)
    }

    /// Players in ranked order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.standings.iter().map(|s| &s.player)
    }
}

/// Stable sort, highest score first.
pub fn sort_by_score(players: &mut [Player]) {
    players.sort_by(|a, b| b.score.cmp(&a.score));
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Game Over ---")?;
        writeln!(f, "Game mode: {}", self.mode)?;
        writeln!(f)?;

        match self.style {
            PlayStyle::Solo => {
                let Some(standing) = self.standings.first() else {
                    return Ok(());
                };
                writeln!(f, "Total Score: {}", standing.player.score)?;
                write!(f, "\n--- Question Summary ---\n{}", standing.player.log)
            }
            PlayStyle::Competition => {
                writeln!(f, "--- Leaderboard ---")?;
                for standing in &self.standings {
                    let rank = format!("{}.", standing.rank);
                    write!(f, "{rank:<3}{:<20}: {}", standing.player.name, standing.player.score)?;
                    if standing.winner {
                        write!(f, " (winner!)")?;
                    }
                    writeln!(f)?;
                }

                writeln!(f, "\n--- Detailed Summary (All Players) ---")?;
                for player in self.players() {
                    writeln!(f, "\nPlayer: {} (Score: {})", player.name, player.score)?;
                    writeln!(f, "Questions:\n{}", player.log)?;
                }
                Ok(())
            }
        }
    }
}
