//! Scripted swipes over a small inbox, printed frame by frame.
//!
//! Runs on a manual clock by default; pass `--realtime` to pace frames with
//! the system clock instead.

mod inbox;

use std::thread;
use std::time::Duration;

use swiperow_animation::{FrameClock, ManualFrameClock, SystemFrameClock};
use swiperow_ui::{Point, PointerEventKind, PointerSample, RowInput, SwipeListHost};

use inbox::Inbox;

const ROW_WIDTH: f32 = 360.0;
const ROW_HEIGHT: f32 = 56.0;
const FRAME: Duration = Duration::from_millis(16);
const MAX_SETTLE_FRAMES: usize = 120;

enum Clock {
    Manual(ManualFrameClock),
    System(SystemFrameClock),
}

impl Clock {
    fn next_frame(&self) -> u64 {
        match self {
            Clock::Manual(clock) => clock.advance(FRAME),
            Clock::System(clock) => {
                thread::sleep(FRAME);
                clock.frame_time_nanos()
            }
        }
    }
}

struct Demo {
    inbox: Inbox,
    host: SwipeListHost,
    clock: Clock,
}

impl Demo {
    fn send(&mut self, key: u64, kind: PointerEventKind, x: f32) -> RowInput {
        let now = self.clock.next_frame();
        self.host.on_frame(now);
        let sample = PointerSample::new(kind, Point::new(x, ROW_HEIGHT / 2.0), now);
        self.host.pointer_input(key, sample)
    }

    /// Drags from `from_x` by `distance`. A `pause` before release drops the
    /// velocity to zero; without it the drag is a three-frame fling.
    fn drag(&mut self, key: u64, from_x: f32, distance: f32, pause: bool) {
        log::info!("row #{key}: drag {distance:+}px{}", if pause { "" } else { " (fling)" });
        self.send(key, PointerEventKind::Down, from_x);
        let steps = if pause { 10 } else { 3 };
        for i in 1..=steps {
            let x = from_x + distance * i as f32 / steps as f32;
            self.send(key, PointerEventKind::Move, x);
        }
        if pause {
            for _ in 0..8 {
                self.send(key, PointerEventKind::Move, from_x + distance);
            }
        }
        self.send(key, PointerEventKind::Up, from_x + distance);
        self.settle();
    }

    fn tap(&mut self, key: u64, x: f32) {
        self.send(key, PointerEventKind::Down, x);
        let input = self.send(key, PointerEventKind::Up, x);
        log::info!("row #{key}: tap at {x} -> {input:?}");
        self.settle();
    }

    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            let now = self.clock.next_frame();
            if !self.host.on_frame(now) {
                break;
            }
        }
        self.inbox.bind(&mut self.host);
        self.print();
    }

    fn print(&self) {
        for key in self.host.keys() {
            let (Some(row), Some(mail)) = (self.host.row(key), self.inbox.mail(key)) else {
                continue;
            };
            let state = row.state();
            println!(
                "  {}{} {:<24} offset {:>7.1} {:?}",
                if mail.unread { '*' } else { ' ' },
                if mail.flagged { '!' } else { ' ' },
                mail.subject,
                state.current_offset(),
                state.state(),
            );
        }
        println!();
    }
}

fn main() {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let realtime = std::env::args().any(|arg| arg == "--realtime");
    let clock = if realtime {
        Clock::System(SystemFrameClock::new())
    } else {
        Clock::Manual(ManualFrameClock::new())
    };

    let inbox = Inbox::with_sample_mail();
    let mut host = SwipeListHost::new(ROW_WIDTH, ROW_HEIGHT);
    inbox.bind(&mut host);
    let mut demo = Demo { inbox, host, clock };
    demo.print();

    let start_x = ROW_WIDTH - 20.0;

    println!("Reveal the trailing actions of the first mail:");
    demo.drag(1, start_x, -120.0, true);

    println!("Swiping another row closes the first:");
    demo.drag(2, start_x, -90.0, true);

    println!("Tap \"flag\" on the open row:");
    demo.tap(2, ROW_WIDTH - 120.0);

    println!("Fling the third mail open from the leading edge:");
    demo.drag(3, 20.0, 36.0, false);

    println!("Full swipe archives the fourth mail:");
    demo.drag(4, start_x, -300.0, true);

    println!("{} archived", demo.inbox.archived_count());
    log::info!("{:?}", demo.host.stats());
}
