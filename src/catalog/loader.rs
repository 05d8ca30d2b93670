//! The player catalog and its CSV loader.
//!
//! Catalog files are headerless, one player per line with six fields:
//! `id,position,name,club,points,price`. Older exports are written in the
//! Windows-1252 codepage, so fields that are not valid UTF-8 are decoded
//! as Windows-1252 instead of being rejected.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use log::debug;

use super::player::{Player, PlayerId, Position};
use crate::error::{DraftError, Result};

const FIELD_COUNT: usize = 6;

/// Immutable collection of draftable players.
#[derive(Debug, Clone)]
pub struct Catalog {
    players: Vec<Player>,
    by_id: HashMap<PlayerId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate IDs.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(players.len());
        for (i, p) in players.iter().enumerate() {
            if by_id.insert(p.id(), i).is_some() {
                return Err(DraftError::DuplicatePlayer(p.id()));
            }
        }
        Ok(Self { players, by_id })
    }

    /// Loads a catalog file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let catalog = Self::from_reader(file)?;
        debug!(
            "loaded {} players from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Parses catalog records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut players = Vec::new();
        for record in reader.byte_records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            if record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            if record.len() != FIELD_COUNT {
                return Err(DraftError::MalformedRecord {
                    line,
                    reason: format!("expected {FIELD_COUNT} fields, found {}", record.len()),
                });
            }

            let field = |i: usize| decode_field(&record[i]);
            let id = parse_number::<PlayerId>(&field(0), "id", line)?;
            let position: Position = field(1).parse()?;
            let points = parse_number::<i32>(&field(4), "points", line)?;
            let price = parse_number::<f64>(&field(5), "price", line)?;
            if !price.is_finite() || price < 0.0 {
                return Err(DraftError::MalformedRecord {
                    line,
                    reason: format!("price must be a non-negative number, got {price}"),
                });
            }

            players.push(Player::new(
                id,
                position,
                field(2).trim(),
                field(3).trim(),
                points,
                price,
            ));
        }

        Self::new(players)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player by ID.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.by_id.get(&id).map(|&i| &self.players[i])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str, line: u64) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DraftError::MalformedRecord {
            line,
            reason: format!("invalid {what} value '{}'", raw.trim()),
        })
}
