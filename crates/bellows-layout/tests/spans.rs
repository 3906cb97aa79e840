//! Span nesting when both faces are laid out on the rayon pool.

use std::sync::{Arc, Mutex};

use bellows_layout::{layout_faces, MatingFaces};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Registry;

type Recorded = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// Records each new span's name with its parent's name.
struct ParentRecorder(Recorded);

impl<S> Layer<S> for ParentRecorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let parent = span.parent().map(|p| p.name().to_string());
        self.0
            .lock()
            .unwrap()
            .push((span.name().to_string(), parent));
    }
}

#[test]
fn face_layouts_nest_under_pair_span() {
    let recorded: Recorded = Arc::default();
    let subscriber = Registry::default().with(ParentRecorder(recorded.clone()));
    // Global so pool threads see the same registry.
    tracing::subscriber::set_global_default(subscriber).unwrap();

    layout_faces(&MatingFaces::reference()).unwrap();

    let spans = recorded.lock().unwrap();
    let faces: Vec<_> = spans.iter().filter(|(name, _)| name == "layout").collect();
    assert_eq!(faces.len(), 2, "{spans:?}");
    for (_, parent) in faces {
        assert_eq!(parent.as_deref(), Some("layout_faces"), "{spans:?}");
    }
}
