use stardo::ui::core::EventHandler;
use tokio::time::{sleep, Duration};

#[tokio::test]
async fn test_event_handler_ticks_at_rate() {
    let mut event_handler = EventHandler::new(20);
    assert_eq!(event_handler.tick_rate().as_millis(), 20);
    assert!(!event_handler.take_tick());

    sleep(Duration::from_millis(25)).await;
    assert!(event_handler.take_tick());

    // The tick is consumed until the rate elapses again
    assert!(!event_handler.take_tick());
}

#[tokio::test]
async fn test_slow_tick_rate_waits() {
    let mut event_handler = EventHandler::new(1000);
    sleep(Duration::from_millis(30)).await;
    assert!(!event_handler.take_tick());
}
