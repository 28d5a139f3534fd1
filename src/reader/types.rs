#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(super) enum Screen {
    SignedOut,
    Home,
    Reading,
}

#[derive(Debug, Clone)]
pub(super) enum ReadingPhase {
    FetchingMetadata,
    Downloading,
    Parsing,
    Ready,
    Failed(ReadError),
}

/// Terminal failure classes for a reading session, each surfaced as inline
/// text in the viewing area. None are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ReadError {
    NotFound(Option<String>),
    NoAttachment,
    ParseFailure,
    Transport(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct RecentBook {
    pub(super) book_id: String,
    pub(super) title: String,
    pub(super) author: String,
    pub(super) opened_at_unix_secs: u64,
}

/// Rasterization slot for one page of the open document.
pub(super) struct PageSlot {
    pub(super) image: Option<Arc<RenderImage>>,
    pub(super) render_width: u32,
    pub(super) failed: bool,
}

impl PageSlot {
    pub(super) fn new() -> Self {
        Self {
            image: None,
            render_width: 0,
            failed: false,
        }
    }
}

/// Everything owned by one reading session. Created when the reading screen
/// is entered and dropped when it is left; nothing survives the session.
pub(super) struct ReadingState {
    pub(super) book_id: String,
    pub(super) access_token: String,
    pub(super) book: Option<crate::library::BookRecord>,
    pub(super) phase: ReadingPhase,
    pub(super) asset_path: Option<PathBuf>,
    pub(super) pages: Vec<PageSlot>,
    pub(super) session: ReadingSession,
    pub(super) flipbook: FlipBook,
    pub(super) render_loading: HashSet<usize>,
    pub(super) render_inflight_tasks: usize,
}

impl ReadingState {
    pub(super) fn new(book_id: String, access_token: String) -> Self {
        Self {
            book_id,
            access_token,
            book: None,
            phase: ReadingPhase::FetchingMetadata,
            asset_path: None,
            pages: Vec::new(),
            session: ReadingSession::new(),
            flipbook: FlipBook::new(0),
            render_loading: HashSet::new(),
            render_inflight_tasks: 0,
        }
    }

    pub(super) fn is_ready(&self) -> bool {
        matches!(self.phase, ReadingPhase::Ready)
    }
}
