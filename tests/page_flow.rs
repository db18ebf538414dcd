//! End-to-end page flows driven through the event queue.

use memecanvas::controls::ButtonStates;
use memecanvas::image::RecordingLoader;
use memecanvas::speech::ScriptedSpeech;
use memecanvas::surface::{DrawOp, RecordingSurface};
use memecanvas::{
    CanvasColor, Captions, DrawingSurface, Event, EventQueue, Extent, Font, GeneratorConfig,
    ImageLoader, ImageRef, LoadToken, MemeGenerator, Rect, SpeechSynthesizer, TextAlign,
    Utterance, Voice, VolumeLevel,
};

type Page = MemeGenerator<RecordingSurface, RecordingLoader, ScriptedSpeech>;

fn page_with_voices() -> Page {
    MemeGenerator::headless(
        GeneratorConfig::default(),
        vec![
            Voice::new("Samantha", "en-US").default_voice(),
            Voice::new("Daniel", "en-GB"),
        ],
    )
}

/// Select an image and deliver its decode through the queue.
fn select_and_load(page: &mut Page, source: &str, width: u32, height: u32) {
    let mut q = EventQueue::new();
    q.push(Event::ImageSelected(ImageRef::new(source)));
    page.drain(&mut q).unwrap();
    let token = page.loader().last_token().unwrap();
    q.push(Event::ImageLoaded {
        token,
        width,
        height,
    });
    page.drain(&mut q).unwrap();
}

#[test]
fn full_session() {
    let mut page = page_with_voices();
    assert_eq!(
        page.buttons().states(),
        ButtonStates {
            submit: true,
            clear: false,
            speak: false
        }
    );
    assert!(page.voices().is_enabled());

    select_and_load(&mut page, "blob:doge", 400, 800);
    let image_dest = page
        .surface()
        .visible_ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::Image { dest, .. } => Some(*dest),
            _ => None,
        })
        .unwrap();
    assert_eq!(image_dest, Rect::new(100.0, 0.0, 200.0, 400.0));

    let mut q = EventQueue::new();
    q.extend([
        Event::Submit(Captions::new("such meme ", "very rust")),
        Event::VoiceSelected("Daniel".into()),
        Event::VolumeInput(99.0),
        Event::SpeakClicked,
    ]);
    page.drain(&mut q).unwrap();

    assert_eq!(
        page.buttons().states(),
        ButtonStates {
            submit: false,
            clear: true,
            speak: true
        }
    );
    assert_eq!(page.surface().visible_text(), ["such meme ", "very rust"]);
    assert_eq!(page.volume().level(), VolumeLevel::High);
    assert_eq!(page.volume_icon(), "./icons/volume-level-3.svg");

    let spoken = &page.speech().spoken;
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "such meme very rust");
    assert_eq!(spoken[0].voice.as_ref().map(|v| v.lang.as_str()), Some("en-GB"));

    page.handle(Event::ClearClicked).unwrap();
    assert!(page.surface().is_blank());
    assert!(page.captions().is_empty());
    assert_eq!(page.loader().resets, 1);
    assert!(page.buttons().states().submit);
}

#[test]
fn volume_scenarios() {
    let mut page = page_with_voices();
    for (value, icon) in [
        (0.0, "volume-level-0"),
        (10.0, "volume-level-1"),
        (50.0, "volume-level-2"),
        (99.0, "volume-level-3"),
    ] {
        let change = page.volume_input(value);
        assert_eq!(change.level.icon_name(), icon);
        assert_eq!(change.icon_path, format!("./icons/{icon}.svg"));
    }
}

#[test]
fn reselect_before_decode_supersedes() {
    let mut page = page_with_voices();
    let first = page.image_selected(ImageRef::new("blob:first"));
    let second = page.image_selected(ImageRef::new("blob:second"));

    // Decodes complete out of order.
    page.handle(Event::ImageLoaded {
        token: second,
        width: 800,
        height: 400,
    })
    .unwrap();
    page.handle(Event::ImageLoaded {
        token: first,
        width: 10,
        height: 10,
    })
    .unwrap();

    let images: Vec<_> = page
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Image { source, .. } => Some(source.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(images, ["blob:second"]);
}

#[test]
fn decode_after_clear_is_dropped() {
    let mut page = page_with_voices();
    select_and_load(&mut page, "blob:a", 100, 100);
    page.submit(Captions::new("a", "b")).unwrap();
    let token = page.image_selected(ImageRef::new("blob:b"));
    page.submit(Captions::new("c", "")).unwrap();
    page.clear();
    assert_eq!(page.image_loaded(token, 100, 100), Ok(None));
    assert!(page.surface().is_blank());
}

#[test]
fn letterbox_color_from_config() {
    let config = GeneratorConfig::new().letterbox(CanvasColor::white());
    let mut page = MemeGenerator::headless(config, Vec::new());
    select_and_load(&mut page, "blob:x", 800, 400);
    assert!(matches!(
        page.surface().visible_ops()[0],
        DrawOp::Fill { color, .. } if color == CanvasColor::white()
    ));
}

// ── Custom collaborators ────────────────────────────────────────────────

/// A surface that only counts calls, standing in for a real canvas binding.
#[derive(Default)]
struct CountingSurface {
    images: usize,
    texts: usize,
    clears: usize,
    font: Option<String>,
}

impl DrawingSurface for CountingSurface {
    fn size(&self) -> Extent {
        Extent::new(300.0, 300.0)
    }
    fn clear_rect(&mut self, _rect: Rect) {
        self.clears += 1;
    }
    fn fill_rect(&mut self, _rect: Rect, _color: CanvasColor) {}
    fn draw_image(&mut self, _image: &ImageRef, _dest: Rect) {
        self.images += 1;
    }
    fn set_font(&mut self, font: &Font) {
        self.font = Some(font.to_string());
    }
    fn set_text_align(&mut self, _align: TextAlign) {}
    fn set_fill_color(&mut self, _color: CanvasColor) {}
    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) {
        self.texts += 1;
    }
}

/// A loader that decodes synchronously into a pending list.
#[derive(Default)]
struct InstantLoader {
    done: Vec<LoadToken>,
}

impl ImageLoader for InstantLoader {
    fn load(&mut self, _source: &ImageRef, token: LoadToken) {
        self.done.push(token);
    }
    fn reset(&mut self) {
        self.done.clear();
    }
}

/// A synthesizer with no voices at all.
#[derive(Default)]
struct MuteSpeech {
    said: Vec<String>,
}

impl SpeechSynthesizer for MuteSpeech {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }
    fn speak(&mut self, utterance: Utterance) {
        assert!(utterance.voice.is_none());
        self.said.push(utterance.text);
    }
}

#[test]
fn custom_collaborators() {
    let mut page = MemeGenerator::new(
        CountingSurface::default(),
        InstantLoader::default(),
        MuteSpeech::default(),
        GeneratorConfig::new().caption_font(Font::new(32.0, "Arial")),
    );
    assert!(!page.voices().is_enabled());

    page.image_selected(ImageRef::new("file.jpg"));
    let token = page.loader().done[0];
    let placed = page.image_loaded(token, 640, 480).unwrap().unwrap();
    assert_eq!(placed.extent(), Extent::new(300.0, 225.0));

    page.submit(Captions::new("top", "bottom")).unwrap();
    assert!(page.speak());

    let (surface, _, speech) = page.into_parts();
    assert_eq!(surface.images, 1);
    assert_eq!(surface.texts, 2);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.font.as_deref(), Some("32px Arial"));
    assert_eq!(speech.said, ["topbottom"]);
}
