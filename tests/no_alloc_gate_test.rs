use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use led_gamer::core::GameConsole;
use led_gamer::term::{FrameBuffer, MatrixFrame, MatrixView, Viewport};
use led_gamer::types::{GameAction, GameKind};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is global.
#[test]
fn frame_loop_does_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut console = GameConsole::new(1);
    let view = MatrixView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut now = 0u64;

    let allocs = with_alloc_counting(|| {
        for kind in GameKind::ALL {
            console.select(kind, now);
            for i in 0..400u32 {
                now += 16;
                let action = match i % 6 {
                    0 => GameAction::Left,
                    1 => GameAction::Up,
                    2 => GameAction::Right,
                    3 => GameAction::Primary,
                    4 => GameAction::Down,
                    _ => GameAction::Secondary,
                };
                console.apply_action(action, now);
                console.run(now);
                if console.is_over() {
                    console.apply_action(GameAction::Restart, now);
                }
                view.render_into(&MatrixFrame::from_console(&console), viewport, &mut fb);
            }
        }
    });

    assert_eq!(allocs, 0);
}
