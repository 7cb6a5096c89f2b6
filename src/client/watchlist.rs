use crate::domain::models::Player;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence seam for the watchlist.
///
/// Injected so the CLI gets a JSON file and tests get an in-memory store.
pub trait WatchlistStore {
    fn load(&self) -> Result<Vec<Player>>;
    fn save(&self, entries: &[Player]) -> Result<()>;
}

impl<S: WatchlistStore> WatchlistStore for &S {
    fn load(&self) -> Result<Vec<Player>> {
        (*self).load()
    }

    fn save(&self, entries: &[Player]) -> Result<()> {
        (*self).save(entries)
    }
}

/// Watchlist backed by a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store location, overridable through WATCHLIST_PATH
    pub fn default_path() -> PathBuf {
        std::env::var("WATCHLIST_PATH")
            .unwrap_or_else(|_| "watchlist.json".to_string())
            .into()
    }
}

impl WatchlistStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Player>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path).context("Failed to read watchlist file")?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse watchlist from {:?}", self.path))
    }

    fn save(&self, entries: &[Player]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(entries).context("Failed to serialize watchlist")?;
        fs::write(&self.path, json).context("Failed to write watchlist file")?;
        Ok(())
    }
}

/// Volatile store for tests
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<Player>>,
}

impl WatchlistStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Player>> {
        Ok(self.entries.lock().expect("store lock").clone())
    }

    fn save(&self, entries: &[Player]) -> Result<()> {
        *self.entries.lock().expect("store lock") = entries.to_vec();
        Ok(())
    }
}

/// User-curated list of players, at most one entry per player id.
///
/// Entries are snapshots captured at add-time; every mutation is written
/// through to the store before it returns.
pub struct Watchlist<S: WatchlistStore> {
    store: S,
    entries: Vec<Player>,
}

impl<S: WatchlistStore> Watchlist<S> {
    pub fn open(store: S) -> Result<Self> {
        let entries = store.load()?;
        Ok(Self { store, entries })
    }

    /// Add a player snapshot; a no-op returning false if the id is present.
    pub fn add(&mut self, player: &Player) -> Result<bool> {
        if self.contains(player.id) {
            return Ok(false);
        }
        self.entries.push(player.clone());
        self.store.save(&self.entries)?;
        Ok(true)
    }

    /// Remove by player id; a no-op returning false if the id is absent.
    pub fn remove(&mut self, player_id: u32) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|p| p.id == player_id) else {
            return Ok(false);
        };
        self.entries.remove(index);
        self.store.save(&self.entries)?;
        Ok(true)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.entries.iter().any(|p| p.id == player_id)
    }

    pub fn entries(&self) -> &[Player] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Position;

    fn player(id: u32, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            team_id: 1,
            position: Position::Forward,
            price: 7.5,
            ownership: 12.0,
            total_points: 80,
            form: 5.5,
            points_per_game: 4.2,
            price_change: 0.1,
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = InMemoryStore::default();
        let mut watchlist = Watchlist::open(&store).unwrap();

        assert!(watchlist.add(&player(1, "Haaland")).unwrap());
        assert!(!watchlist.add(&player(1, "Haaland")).unwrap());

        assert_eq!(watchlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = InMemoryStore::default();
        let mut watchlist = Watchlist::open(&store).unwrap();
        watchlist.add(&player(1, "Haaland")).unwrap();

        assert!(!watchlist.remove(99).unwrap());
        assert!(watchlist.remove(1).unwrap());
        assert!(watchlist.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let store = InMemoryStore::default();
        {
            let mut watchlist = Watchlist::open(&store).unwrap();
            watchlist.add(&player(3, "Salah")).unwrap();
            watchlist.add(&player(1, "Haaland")).unwrap();
            watchlist.add(&player(2, "Saka")).unwrap();
        }

        let reloaded = Watchlist::open(&store).unwrap();
        let ids: Vec<u32> = reloaded.entries().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(reloaded.entries()[0].name, "Salah");
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = InMemoryStore::default();
        let mut watchlist = Watchlist::open(&store).unwrap();

        watchlist.add(&player(1, "Haaland")).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);

        watchlist.remove(1).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join("fpl_pulse_watchlist_test.json");
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::new(&path);
        {
            let mut watchlist = Watchlist::open(&store).unwrap();
            watchlist.add(&player(7, "Son")).unwrap();
        }

        let reloaded = Watchlist::open(&store).unwrap();
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].name, "Son");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_empty_watchlist() {
        let store = JsonFileStore::new("/nonexistent/path/watchlist.json");
        let watchlist = Watchlist::open(store).unwrap();
        assert!(watchlist.is_empty());
    }
}
