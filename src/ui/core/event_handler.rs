use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next terminal event, or a tick once the tick rate elapses
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::translate(crossterm::event::read()?));
        }

        if self.take_tick() {
            return Ok(EventType::Tick);
        }

        // Nothing pending: yield briefly so the loop doesn't spin
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(EventType::Other)
    }

    /// Consume the pending tick once the tick rate has elapsed
    pub fn take_tick(&mut self) -> bool {
        if self.last_tick.elapsed() < self.tick_rate {
            return false;
        }
        self.last_tick = Instant::now();
        true
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    fn translate(event: Event) -> EventType {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}
