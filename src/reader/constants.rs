const HEADER_HEIGHT: f32 = 64.0;
const FOOTER_HEIGHT_COMPACT: f32 = 28.0;
// The footer grows once the page count is known; the layout recomputes from
// the measured footer height, so the spread resizes with it.
const FOOTER_HEIGHT_READY: f32 = 44.0;

const PAGE_INPUT_DEBOUNCE_MS: u64 = 800;
// Executor timers can fire a hair early; the grace keeps the wakeup on the
// settled side of the debounce window.
const PAGE_INPUT_DEBOUNCE_GRACE_MS: u64 = 16;

const FLIP_FRAME_MS: u64 = 16;

const RENDER_MAX_PARALLEL_TASKS: usize = 2;
const RENDER_BATCH_SIZE: usize = 4;

const MAX_RECENT_BOOKS: usize = 12;

const WINDOW_SIZE_TREE: &str = "window_size";
const WINDOW_SIZE_KEY_WIDTH: &str = "width";
const WINDOW_SIZE_KEY_HEIGHT: &str = "height";
const RECENT_BOOKS_TREE: &str = "recent_books";
const SESSION_TREE: &str = "session";
