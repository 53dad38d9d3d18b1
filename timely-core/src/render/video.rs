//! Video link classification and the embedded player's identity key.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Matches the youtube link shapes already stored in homepage content:
/// `youtu.be/<id>`, `youtube.com/embed/<id>`, `youtube.com/v/<id>`,
/// `youtube.com/watch?v=<id>` and `youtube.com/watch?...&v=<id>`, where the id
/// is 11 url-safe characters. The dots stay unescaped and the pattern stays
/// unanchored: stored links must keep classifying exactly as they always have.
static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu.be/|youtube.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))([A-Za-z0-9_-]{11})")
        .expect("youtube link pattern is valid")
});

/// What a video module's url turns into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSource {
    /// The url is empty.
    Missing,
    /// A recognized hosting link, rewritten to its embeddable form.
    Embed { video_id: String, embed_url: String },
    /// Anything else. Shown as text, never played.
    Link { url: String },
}

impl VideoSource {
    pub fn classify(url: &str) -> Self {
        if url.is_empty() {
            return VideoSource::Missing;
        }

        match YOUTUBE_LINK.captures(url).and_then(|caps| caps.get(1)) {
            Some(id) => VideoSource::Embed {
                video_id: id.as_str().to_string(),
                embed_url: format!("{EMBED_BASE}{}", id.as_str()),
            },
            None => VideoSource::Link {
                url: url.to_string(),
            },
        }
    }

    pub fn embed_url(&self) -> Option<&str> {
        match self {
            VideoSource::Embed { embed_url, .. } => Some(embed_url),
            _ => None,
        }
    }
}

/// Identity of an embedded player.
///
/// Whenever the player navigates anywhere other than its embed url, the key
/// is bumped so the presentation layer throws the player away and builds a
/// fresh one pointed back at the embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPlayer {
    embed_url: String,
    key: u64,
}

impl EmbeddedPlayer {
    pub fn new(embed_url: impl Into<String>) -> Self {
        EmbeddedPlayer {
            embed_url: embed_url.into(),
            key: 0,
        }
    }

    pub fn for_source(source: &VideoSource) -> Option<Self> {
        source.embed_url().map(EmbeddedPlayer::new)
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    /// Report a navigation of the player. Returns true if it must be recreated.
    pub fn navigated_to(&mut self, target: &str) -> bool {
        if target == self.embed_url {
            return false;
        }
        self.key += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn embed(id: &str) -> VideoSource {
        VideoSource::Embed {
            video_id: id.to_string(),
            embed_url: format!("https://www.youtube.com/embed/{id}"),
        }
    }

    #[rstest]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://youtube.com/v/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42")]
    #[case("youtu.be/dQw4w9WgXcQ")]
    fn recognized_links_embed(#[case] url: &str) {
        assert_eq!(VideoSource::classify(url), embed("dQw4w9WgXcQ"));
    }

    #[rstest]
    #[case("https://example.com/video.mp4")]
    #[case("https://vimeo.com/76979871")]
    #[case("https://youtu.be/short")]
    #[case("https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw")]
    #[case("   ")]
    fn other_links_are_plain_text(#[case] url: &str) {
        assert_eq!(
            VideoSource::classify(url),
            VideoSource::Link {
                url: url.to_string()
            }
        );
    }

    #[test]
    fn empty_url_is_missing() {
        assert_eq!(VideoSource::classify(""), VideoSource::Missing);
    }

    #[test]
    fn id_is_the_first_eleven_characters() {
        assert_eq!(
            VideoSource::classify("https://youtu.be/dQw4w9WgXcQXYZ"),
            embed("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn last_v_parameter_wins_after_other_params() {
        assert_eq!(
            VideoSource::classify("https://www.youtube.com/watch?list=PL1&v=aaaaaaaaaaa&x=1&v=bbbbbbbbbbb"),
            embed("bbbbbbbbbbb")
        );
    }

    #[test]
    fn player_is_recreated_only_when_it_leaves_the_embed() {
        let source = VideoSource::classify("https://youtu.be/dQw4w9WgXcQ");
        let mut player = EmbeddedPlayer::for_source(&source).unwrap();
        assert_eq!(player.key(), 0);

        assert!(!player.navigated_to("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert_eq!(player.key(), 0);

        assert!(player.navigated_to("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(player.navigated_to("https://accounts.google.com/"));
        assert_eq!(player.key(), 2);
    }

    #[test]
    fn plain_links_have_no_player() {
        let source = VideoSource::classify("https://example.com/video.mp4");
        assert!(EmbeddedPlayer::for_source(&source).is_none());
    }
}
