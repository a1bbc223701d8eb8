//! Statistics integration tests.
//!
//! Battles are fought through `GameEngine` and the stored aggregate is
//! checked afterwards.

use dungeon_ccg::cards::{BaseCard, CardId, CardRegistry, CardType, PlayerCard, PlayerCardId};
use dungeon_ccg::combat::WinReason;
use dungeon_ccg::core::{EngineConfig, GameId, PlayerId, PlayerScope};
use dungeon_ccg::dungeons::{
    Dungeon, DungeonCardSlot, DungeonId, DungeonRegistry, DungeonTier, EnvironmentId,
};
use dungeon_ccg::engine::{GameEngine, ManualClock};
use dungeon_ccg::store::{CollectionStore, MemoryStore};

const PLAYER: PlayerId = PlayerId::new(1);
const GAMES: [u32; 4] = [1, 2, 3, 4];

fn scope(game: u32) -> PlayerScope {
    PlayerScope::new(PLAYER, GameId::new(game))
}

/// Dungeon 1 is always won, dungeon 2 always lost.
fn engine() -> GameEngine<MemoryStore, ManualClock> {
    let mut cards = CardRegistry::new();
    cards.register(BaseCard::new(CardId::new(1), "Ember", 10, 12, CardType::Fire)).unwrap();
    cards.register(BaseCard::new(CardId::new(2), "Pebble", 8, 9, CardType::Earth)).unwrap();
    cards.register(BaseCard::new(CardId::new(3), "Titan", 50, 50, CardType::Earth)).unwrap();

    let env = EnvironmentId::new(1);
    let mut dungeons = DungeonRegistry::new();
    dungeons
        .register(
            Dungeon::new(DungeonId::new(1), "Glade", env, DungeonTier::SimpleEncounter)
                .with_slot(DungeonCardSlot::card(CardId::new(2))),
            &cards,
        )
        .unwrap();
    dungeons
        .register(
            Dungeon::new(DungeonId::new(2), "Crag", env, DungeonTier::LargeDungeon)
                .with_slot(DungeonCardSlot::card(CardId::new(3))),
            &cards,
        )
        .unwrap();

    let store = MemoryStore::new(cards, dungeons);
    for game in GAMES {
        store
            .add_player_card(PlayerCard::new(PlayerCardId::new(game), CardId::new(1), scope(game)))
            .unwrap();
    }
    let engine = GameEngine::new(EngineConfig::default(), store)
        .unwrap()
        .with_clock(ManualClock::new(0, 30));
    for game in GAMES {
        engine.set_active_deck(scope(game), [PlayerCardId::new(game)]).unwrap();
    }
    engine
}

fn fight(engine: &GameEngine<MemoryStore, ManualClock>, dungeons: &[u32]) {
    for &d in dungeons {
        engine.start_battle(scope(1), DungeonId::new(d)).unwrap();
    }
}

/// No battles yet: fresh counters.
#[test]
fn test_fresh_player() {
    let engine = engine();
    let stats = engine.player_stats(PLAYER).unwrap();

    assert_eq!(stats.total_battles, 0);
    assert_eq!(stats.fastest_win_ms, None);
    assert_eq!(stats.win_rate(), 0.0);
}

/// W, W, L, W: longest win streak 2, current 1.
#[test]
fn test_streaks() {
    let engine = engine();
    fight(&engine, &[1, 1, 2, 1]);
    let stats = engine.player_stats(PLAYER).unwrap();

    assert_eq!(stats.total_battles, 4);
    assert_eq!((stats.battles_won, stats.battles_lost), (3, 1));
    assert_eq!(stats.current_win_streak, 1);
    assert_eq!(stats.longest_win_streak, 2);
    assert_eq!(stats.longest_lose_streak, 1);
    assert_eq!(stats.current_lose_streak, 0);
    assert!((stats.win_rate() - 0.75).abs() < f64::EPSILON);
}

/// Clash counters by type, reason, and damage.
#[test]
fn test_clash_counters() {
    let engine = engine();
    fight(&engine, &[1, 2]);
    let stats = engine.player_stats(PLAYER).unwrap();

    assert_eq!(stats.total_clashes, 2);
    assert_eq!((stats.clashes_won, stats.clashes_lost), (1, 1));
    assert_eq!(stats.wins_by_type.get(CardType::Fire), 1);
    assert_eq!(stats.losses_by_type.get(CardType::Fire), 1);
    assert_eq!(stats.wins_by_reason.get(WinReason::Damage), 1);
    assert_eq!(stats.losses_by_reason.get(WinReason::Damage), 1);
    assert_eq!(stats.damage_dealt, 20);
    assert_eq!(stats.damage_taken, 58);
    assert_eq!(stats.highest_clash_damage, 10);
}

/// Completions count wins only, by tier.
#[test]
fn test_tier_completions() {
    let engine = engine();
    fight(&engine, &[1, 2, 1]);
    let stats = engine.player_stats(PLAYER).unwrap();

    assert_eq!(stats.completions_by_tier.get(DungeonTier::SimpleEncounter), 2);
    assert_eq!(stats.completions_by_tier.get(DungeonTier::LargeDungeon), 0);
}

/// Durations come from the injected clock.
#[test]
fn test_timing() {
    let engine = engine();
    fight(&engine, &[2, 1]);
    let stats = engine.player_stats(PLAYER).unwrap();

    assert_eq!(stats.total_battle_time_ms, 60);
    assert_eq!(stats.average_battle_time_ms, 30);
    assert_eq!(stats.fastest_win_ms, Some(30));
}

/// Stats belong to the player across games.
#[test]
fn test_stats_span_games() {
    let engine = engine();
    fight(&engine, &[1]);
    engine.start_battle(scope(2), DungeonId::new(1)).unwrap();

    assert_eq!(engine.player_stats(PLAYER).unwrap().battles_won, 2);
    assert_eq!(engine.won_battles(scope(1)).unwrap(), 1);
}

/// Battles fought in parallel games all land in the player's stats.
#[test]
fn test_parallel_games_keep_every_battle() {
    let engine = engine();

    std::thread::scope(|s| {
        for game in GAMES {
            let engine = &engine;
            s.spawn(move || {
                for d in [1, 2, 1, 1, 2] {
                    engine.start_battle(scope(game), DungeonId::new(d)).unwrap();
                }
            });
        }
    });

    let recorded: usize = GAMES
        .iter()
        .map(|&game| engine.battles(scope(game)).unwrap().len())
        .sum();
    let stats = engine.player_stats(PLAYER).unwrap();
    assert_eq!(recorded, 20);
    assert_eq!(stats.total_battles as usize, recorded);
    assert_eq!(stats.battles_won, 12);
    assert_eq!(stats.total_clashes, 20);
}
