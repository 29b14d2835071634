//! Round-trip tests for mapping files.
//!
//! These tests verify that a board written to disk reloads into an equivalent
//! board: the same categories, the same items per category, and the same home
//! pictograms.

use std::collections::{BTreeMap, BTreeSet};

use aac_board::config::DuplicatePolicy;
use aac_board::mapper::CategoryMapper;
use aac_board::mapping;

const BOARD: &str = "img/food/plate.png food
>img/food/icons8-french-fries-96.png french fries
>img/food/icons8-watermelon-96.png watermelon
img/clothing/hanger.png clothing
>img/clothing/collaredshirt.png collared shirt
img/feelings/heart.png how I feel
>img/feelings/happy.png I am happy
>img/feelings/sad.png I am sad
";

type Snapshot = (
    BTreeSet<(String, String)>,
    BTreeMap<String, BTreeSet<(String, String)>>,
);

/// Order-independent view of a board's home mapping and category contents.
fn snapshot(board: &CategoryMapper) -> Snapshot {
    let mut home = BTreeSet::new();
    let mut categories: BTreeMap<String, BTreeSet<(String, String)>> = BTreeMap::new();
    for name in board.category_names() {
        let category = board.category(&name).unwrap();
        let items: BTreeSet<(String, String)> = category
            .items()
            .map(|(loc, text)| (loc.to_string(), text.to_string()))
            .collect();
        categories.insert(name, items);
    }
    let mut probe = board.clone();
    for loc in board.home_image_locs() {
        probe.reset();
        probe.select(&loc).unwrap();
        home.insert((loc, probe.get_category_name().to_string()));
    }
    (home, categories)
}

#[test]
fn board_survives_write_and_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("AACMappings.txt");
    let output = dir.path().join("copy.txt");
    std::fs::write(&source, BOARD).unwrap();

    let original = mapping::load_file(&source, DuplicatePolicy::Overwrite).unwrap();
    mapping::write_file(&original, &output).unwrap();
    let reloaded = mapping::load_file(&output, DuplicatePolicy::Overwrite).unwrap();

    assert_eq!(snapshot(&original), snapshot(&reloaded));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), BOARD);
}

#[test]
fn edits_survive_write_and_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    std::fs::write(&path, BOARD).unwrap();

    let mut board = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    board.add_item("img/toys/box.png", "toys").unwrap();
    board.select("img/toys/box.png").unwrap();
    board.add_item("img/toys/ball.png", "ball").unwrap();
    board.reset();
    board.select("img/food/plate.png").unwrap();
    board
        .add_item("img/food/icons8-watermelon-96.png", "juicy watermelon")
        .unwrap();
    mapping::write_file(&board, &path).unwrap();

    let mut reloaded = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    assert_eq!(snapshot(&board), snapshot(&reloaded));

    reloaded.select("img/toys/box.png").unwrap();
    assert_eq!(reloaded.select("img/toys/ball.png").unwrap(), "ball");
    reloaded.reset();
    reloaded.select("img/food/plate.png").unwrap();
    assert_eq!(
        reloaded.select("img/food/icons8-watermelon-96.png").unwrap(),
        "juicy watermelon"
    );
}

#[test]
fn empty_board_writes_empty_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    mapping::write_file(&CategoryMapper::new(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    let reloaded = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    assert!(reloaded.category_names().is_empty());
}

#[test]
fn repointed_home_image_survives_write_and_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("board.txt");

    let mut board = CategoryMapper::new();
    board.add_item("img/a.png", "food").unwrap();
    board.add_item("img/b.png", "clothing").unwrap();
    board.add_item("img/a.png", "drinks").unwrap();
    mapping::write_file(&board, &path).unwrap();

    let reloaded = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    let names = |b: &CategoryMapper| b.category_names().into_iter().collect::<BTreeSet<_>>();
    assert_eq!(names(&board), names(&reloaded));
    assert!(reloaded.category("food").is_none());
    assert_eq!(snapshot(&board), snapshot(&reloaded));
}

#[test]
fn unencodable_board_keeps_previous_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    std::fs::write(&path, BOARD).unwrap();

    let mut board = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    board.add_item("img/my pic.png", "toys").unwrap();
    assert!(mapping::write_file(&board, &path).is_err());

    // The file on disk still loads as the original board.
    let reloaded = mapping::load_file(&path, DuplicatePolicy::Overwrite).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), BOARD);
    assert!(reloaded.category("toys").is_none());
}
