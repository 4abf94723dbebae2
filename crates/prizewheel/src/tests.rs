//! End-to-end tests for the composite renderer
//!
//! Wedge colors are made solid and distinct where a test needs to tell
//! segments apart by pixel.

use crate::prelude::*;
use base64::Engine;
use prizewheel_text::{LayoutOptions, SizedFace, TextLayout};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// 1x1 red PNG
const RED_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

const UNREACHABLE: &str = "http://127.0.0.1:1/avatar.png";

fn red_data_uri() -> String {
    format!("data:image/png;base64,{}", RED_PIXEL)
}

fn segments(labels: &[&str]) -> Vec<Segment> {
    labels.iter().copied().map(Segment::new).collect()
}

fn two_tone_renderer() -> CompositeRenderer {
    let red = Color::from_hex(0xFF0000);
    let blue = Color::from_hex(0x0000FF);
    let style = WheelStyle {
        palette: vec![ColorStopPair::new(red, red), ColorStopPair::new(blue, blue)],
        ..WheelStyle::default()
    };
    CompositeRenderer::new(style, Arc::new(WheelAssets::bundled().unwrap())).unwrap()
}

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

fn is_fallback_gray([r, g, b, a]: [u8; 4]) -> bool {
    r == g && g == b && (200..=208).contains(&r) && a == 255
}

/// Serve one PNG over HTTP on a random local port
async fn serve_png(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{}/avatar.png", addr)
}

/// Counts warnings emitted by this workspace's crates
struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let meta = event.metadata();
        if *meta.level() == tracing::Level::WARN && meta.target().starts_with("prizewheel") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn test_plain_wheel_png() {
    let renderer = CompositeRenderer::bundled().unwrap();
    let png = renderer
        .render(&segments(&["A", "B", "C", "D"]), &red_data_uri())
        .await
        .unwrap();

    let image = decode(&png);
    assert_eq!(image.dimensions(), (600, 600));
    assert_eq!(image.get_pixel(2, 2).0[3], 0);
}

#[tokio::test]
async fn test_empty_segments_rejected() {
    let renderer = CompositeRenderer::bundled().unwrap();
    let result = renderer.render(&[], UNREACHABLE).await;
    assert!(matches!(result, Err(WheelError::NoSegments)));
}

#[test]
fn test_first_wedge_centered_under_pointer() {
    let renderer = two_tone_renderer();
    let avatar = renderer.avatar_loader().fallback();
    let canvas = renderer
        .compose(&segments(&["A", "B", "C", "D"]), &avatar)
        .unwrap();

    // Straight up is the middle of segment 0
    let [r, _, b, _] = canvas.pixel(300, 125).unwrap();
    assert!(r > 200 && b < 60, "top should be segment 0, got r={r} b={b}");
    // Straight right is the middle of segment 1
    let [r, _, b, _] = canvas.pixel(475, 300).unwrap();
    assert!(b > 200 && r < 60, "right should be segment 1, got r={r} b={b}");
}

#[test]
fn test_winner_is_rotated_to_top() {
    let renderer = two_tone_renderer();
    let avatar = renderer.avatar_loader().fallback();

    let mut marked = segments(&["A", "B", "C", "D"]);
    marked[2].winner = true;
    let with_winner = renderer.compose(&marked, &avatar).unwrap();

    let pre_rotated = renderer
        .compose(&segments(&["C", "D", "A", "B"]), &avatar)
        .unwrap();
    let unrotated = renderer
        .compose(&segments(&["A", "B", "C", "D"]), &avatar)
        .unwrap();

    assert!(with_winner.to_rgba8() == pre_rotated.to_rgba8());
    assert!(with_winner.to_rgba8() != unrotated.to_rgba8());
}

#[test]
fn test_no_winner_is_identity() {
    let renderer = two_tone_renderer();
    let avatar = renderer.avatar_loader().fallback();
    let labels = segments(&["A", "B", "C"]);

    let first = renderer.compose(&labels, &avatar).unwrap();
    let again = renderer.compose(&labels, &avatar).unwrap();
    assert!(first.to_rgba8() == again.to_rgba8());
}

#[tokio::test]
async fn test_fetched_avatar_fills_hub() {
    let png = base64::engine::general_purpose::STANDARD
        .decode(RED_PIXEL)
        .unwrap();
    let url = serve_png(png).await;

    let renderer = CompositeRenderer::bundled().unwrap();
    let mut labels = segments(&["A", "B", "C", "D"]);
    labels[2].winner = true;
    let image = decode(&renderer.render(&labels, &url).await.unwrap());

    let [r, g, b, a] = image.get_pixel(300, 300).0;
    assert!(r > 250 && g < 5 && b < 5 && a == 255, "hub should show the avatar");
}

#[tokio::test]
async fn test_unreachable_avatar_uses_fallback() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = {
        use tracing_subscriber::layer::SubscriberExt;
        tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)))
    };
    let _guard = tracing::subscriber::set_default(subscriber);

    let renderer = CompositeRenderer::bundled().unwrap();
    let mut labels = segments(&["A", "B", "C", "D"]);
    labels[2].winner = true;
    let image = decode(&renderer.render(&labels, UNREACHABLE).await.unwrap());

    assert_eq!(image.dimensions(), (600, 600));
    assert!(is_fallback_gray(image.get_pixel(300, 300).0));
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fallback_avatar_composited() {
    let renderer = CompositeRenderer::bundled().unwrap();
    let avatar = renderer.avatar_loader().fallback();
    assert_eq!(avatar.origin, AvatarOrigin::Fallback);

    let canvas = renderer.compose(&segments(&["A"]), &avatar).unwrap();
    assert!(is_fallback_gray(canvas.pixel(300, 300).unwrap()));
}

#[test]
fn test_long_label_wraps_around_mid_radius() {
    let renderer = CompositeRenderer::bundled().unwrap();
    let style = renderer.style();
    let geometry = style.geometry();
    let face = renderer
        .segment_renderer()
        .assets()
        .font(style.label.weight);

    let layout = TextLayout::new(
        "Weekend getaway for two in the mountains",
        geometry.label_anchor().y,
        LayoutOptions {
            max_width: geometry.label_width(style.label.padding),
            line_height: style.label.line_height,
        },
        &SizedFace {
            face,
            size: style.label.font_size,
        },
    );

    assert!(layout.line_count() >= 2);
    let first = layout.lines[0].baseline;
    let last = layout.lines[layout.line_count() - 1].baseline;
    assert!((first + last).abs() < 1e-3);

    let avatar = renderer.avatar_loader().fallback();
    let labels = vec![
        Segment::new("Weekend getaway for two in the mountains"),
        Segment::new("Mug"),
    ];
    renderer.compose(&labels, &avatar).unwrap();
}

#[tokio::test]
async fn test_concurrent_renders_are_independent() {
    let renderer = CompositeRenderer::bundled().unwrap();
    let labels = segments(&["Alpha", "Beta", "Gamma"]);
    let uri = red_data_uri();

    let (first, second) = tokio::join!(
        renderer.render(&labels, &uri),
        renderer.render(&labels, &uri)
    );
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn test_renderers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompositeRenderer>();
    assert_send_sync::<SegmentRenderer>();
    assert_send_sync::<WheelAssets>();
}
