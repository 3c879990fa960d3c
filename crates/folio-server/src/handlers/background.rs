//! Animated background stream.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use folio_background::{Background, Frame, MountedBackground, ViewportSize};
use serde::Deserialize;
use tokio_stream::Stream;
use tokio_stream::wrappers::WatchStream;

use crate::state::AppState;

const DEFAULT_WIDTH: f64 = 1200.0;
const DEFAULT_HEIGHT: f64 = 640.0;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ViewportQuery {
    width: Option<f64>,
    height: Option<f64>,
}

/// Frames of one mounted background.
///
/// Owns the mount: when the client disconnects, axum drops the stream and
/// the animation task is released with it.
pub(crate) struct FrameStream {
    frames: WatchStream<Frame>,
    _background: MountedBackground,
}

impl FrameStream {
    pub(crate) fn new(background: MountedBackground) -> Self {
        Self {
            frames: WatchStream::new(background.frames()),
            _background: background,
        }
    }
}

impl Stream for FrameStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.frames)
            .poll_next(cx)
            .map(|frame| frame.map(|f| Ok(Event::default().event("frame").data(f.to_svg()))))
    }
}

/// Handle GET /api/background.
pub(crate) async fn stream_background(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewportQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let viewport = ViewportSize::new(
        query.width.unwrap_or(DEFAULT_WIDTH),
        query.height.unwrap_or(DEFAULT_HEIGHT),
    );
    tracing::debug!(width = viewport.width, height = viewport.height, "Mounting background stream");
    let background = Background::mount(viewport, state.site.background());
    Sse::new(FrameStream::new(background)).keep_alive(KeepAlive::default())
}
