use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};

use itsatui::app::App;
use itsatui::config::Config;
use itsatui::scheduler::{advance, ManualClock};
use itsatui::ui;

fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    screen_rows(terminal).iter().any(|row| row.contains(needle))
}

fn setup_sized(
    splash: bool,
    width: u16,
    height: u16,
) -> (App<ManualClock>, ManualClock, Terminal<TestBackend>) {
    let config = Config {
        splash,
        ..Config::default()
    };
    let clock = ManualClock::new();
    let mut app = App::new(&config, clock.clone());
    app.resize(width, height);
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    (app, clock, terminal)
}

fn setup(splash: bool) -> (App<ManualClock>, ManualClock, Terminal<TestBackend>) {
    setup_sized(splash, 100, 30)
}

#[test]
fn test_toast_slides_onto_screen() {
    let (mut app, clock, mut terminal) = setup(false);

    app.show_help();
    terminal.draw(|f| ui::render(f, &app)).unwrap();
    assert!(!screen_contains(&terminal, "[x]"));

    advance(&mut app, &clock, Duration::from_millis(500));
    terminal.draw(|f| ui::render(f, &app)).unwrap();
    assert!(screen_contains(&terminal, "[x]"));
    assert!(screen_contains(&terminal, "j/k scroll,"));
}

#[test]
fn test_toast_leaves_screen_after_timeout() {
    let (mut app, clock, mut terminal) = setup(false);

    app.show_help();
    advance(&mut app, &clock, Duration::from_secs(10));
    terminal.draw(|f| ui::render(f, &app)).unwrap();
    assert!(!screen_contains(&terminal, "[x]"));
}

#[test]
fn test_splash_covers_then_clears() {
    let (mut app, clock, mut terminal) = setup(true);

    terminal.draw(|f| ui::render(f, &app)).unwrap();
    assert!(screen_contains(&terminal, "Loading..."));

    advance(&mut app, &clock, Duration::from_millis(2600));
    terminal.draw(|f| ui::render(f, &app)).unwrap();
    assert!(!screen_contains(&terminal, "Loading..."));
}

#[test]
fn test_navbar_keeps_every_link_at_80_columns() {
    let (app, _, mut terminal) = setup_sized(false, 80, 24);

    terminal.draw(|f| ui::render(f, &app)).unwrap();
    let navbar = &screen_rows(&terminal)[1];
    assert!(navbar.contains("6:Contact"), "{navbar}");
}
