//! SVG document assembly
//!
//! Turns a `Timeline` into a single self-contained SVG. Bricks share one
//! `<symbol>`, colours come from a `c{n}` class per palette entry, and every
//! animation uses the same duration and loops forever.

use std::sync::LazyLock;

use regex::Regex;

use crate::layout::{Arena, Layout};
use crate::palette::Palette;
use crate::settings::Options;
use crate::sim::{Ball, Brick, Paddle};
use crate::timeline::{BrickEffect, Keyframes, Timeline, Transition};

/// Render the document for one run
pub fn render(bricks: &[Brick], timeline: &Timeline, arena: &Arena, options: &Options) -> String {
    let layout = &options.layout;
    let palette = options.palette();
    let dur = timeline.duration;

    let mut svg = format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = arena.width,
        h = arena.height
    );
    svg.push_str(&style(&palette));
    svg.push_str(&brick_symbol(layout));

    for (brick, transition) in bricks.iter().zip(&timeline.bricks) {
        svg.push_str(&brick_use(brick, transition.as_ref(), &palette, dur));
    }

    svg.push_str(&paddle(timeline, arena, options));
    svg.push_str(&ball(timeline, arena, options));
    svg.push_str("</svg>\n");
    svg
}

/// One `.c{n}{fill:...}` rule per palette entry
fn style(palette: &Palette) -> String {
    let rules: String = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| format!(".c{}{{fill:{}}}", i, c))
        .collect();
    format!("  <style>{}</style>\n", rules)
}

fn brick_symbol(layout: &Layout) -> String {
    format!(
        r#"  <defs>
    <symbol id="brick">
      <rect x="0" y="0" width="{s}" height="{s}" rx="{r}"/>
    </symbol>
  </defs>
"#,
        s = layout.brick_size,
        r = layout.brick_radius
    )
}

fn brick_use(brick: &Brick, transition: Option<&Transition>, palette: &Palette, dur: f64) -> String {
    let (x, y) = (brick.pos.x, brick.pos.y);
    match transition {
        None => format!(
            r##"  <use href="#brick" x="{x}" y="{y}" class="{class}" opacity="1" />
"##,
            class = brick.class_name()
        ),
        Some(t) => match t.effect {
            BrickEffect::Hide => format!(
                r##"  <use href="#brick" x="{x}" y="{y}" class="{class}">
    <animate attributeName="opacity" values="1;1;0;0" keyTimes="{key_times}" dur="{dur}s" fill="freeze" repeatCount="indefinite"/>
  </use>
"##,
                class = brick.class_name(),
                key_times = t.key_times_attr()
            ),
            BrickEffect::Empty => {
                let from = palette.color(brick.color_class);
                let to = palette.base();
                format!(
                    r##"  <use href="#brick" x="{x}" y="{y}" fill="{from}">
    <animate attributeName="fill" values="{from};{from};{to};{to}" keyTimes="{key_times}" dur="{dur}s" fill="freeze" repeatCount="indefinite"/>
  </use>
"##,
                    key_times = t.key_times_attr()
                )
            }
        },
    }
}

/// `<animate>` for one attribute, looping over the whole run
fn animate(attribute: &str, keyframes: &Keyframes, dur: f64) -> String {
    format!(
        r#"<animate attributeName="{attribute}" values="{values}" dur="{dur}s" repeatCount="indefinite"/>"#,
        values = keyframes.to_attr()
    )
}

/// Paddle y is fixed, so it sits in a translated group and only x animates
fn paddle(timeline: &Timeline, arena: &Arena, options: &Options) -> String {
    let layout = &options.layout;
    let rect = format!(
        r#"width="{}" height="{}" rx="{}" fill="{}""#,
        layout.paddle_width, layout.paddle_height, layout.paddle_radius, options.paddle_color
    );
    let body = if timeline.is_static() {
        let rest = Paddle::centered(layout, arena);
        format!(r#"<rect x="{}" y="0" {rect}/>"#, rest.x)
    } else {
        format!(
            "<rect y=\"0\" {rect}>\n      {}\n    </rect>",
            animate("x", &timeline.paddle_x, timeline.duration)
        )
    };
    format!(
        "  <g transform=\"translate(0,{})\">\n    {body}\n  </g>\n",
        arena.paddle_y
    )
}

fn ball(timeline: &Timeline, arena: &Arena, options: &Options) -> String {
    let layout = &options.layout;
    if timeline.is_static() {
        let rest = Ball::launch(layout, arena);
        return format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            rest.pos.x, rest.pos.y, layout.ball_radius, options.ball_color
        );
    }
    format!(
        "  <circle r=\"{}\" fill=\"{}\">\n    {}\n    {}\n  </circle>\n",
        layout.ball_radius,
        options.ball_color,
        animate("cx", &timeline.ball_x, timeline.duration),
        animate("cy", &timeline.ball_y, timeline.duration)
    )
}

static RUNS_OF_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static SPACE_BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Strip formatting whitespace
pub fn minify(svg: &str) -> String {
    let collapsed = RUNS_OF_SPACE.replace_all(svg, " ");
    let joined = SPACE_BETWEEN_TAGS.replace_all(&collapsed, "><");
    joined.replace('\n', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteChoice;
    use glam::DVec2;

    fn options(palette: PaletteChoice) -> Options {
        Options::from_palette(palette)
    }

    fn timeline(bricks: Vec<Option<Transition>>) -> Timeline {
        Timeline {
            duration: 2.0,
            ball_x: Keyframes { values: vec![10.0, 20.0] },
            ball_y: Keyframes { values: vec![30.0, 40.0] },
            paddle_x: Keyframes { values: vec![5.0, 6.0] },
            bricks,
        }
    }

    #[test]
    fn test_document_contains_every_part() {
        let options = options(PaletteChoice::GithubDark);
        let arena = options.layout.arena(2);
        let bricks = vec![
            Brick::new(DVec2::new(15.0, 15.0), 2, true),
            Brick::new(DVec2::new(30.0, 15.0), 0, false),
        ];
        let tl = timeline(vec![
            Some(Transition {
                at: 0.25,
                effect: BrickEffect::Hide,
            }),
            None,
        ]);
        let svg = render(&bricks, &tl, &arena, &options);

        assert!(svg.starts_with("<svg width=\"57\" height=\"242\""));
        assert!(svg.contains(".c0{fill:#151B23}.c1{fill:#033A16}"));
        assert!(svg.contains(r#"<symbol id="brick">"#));
        assert!(svg.contains(r#"keyTimes="0;0.2500;0.2500;1" dur="2s""#));
        assert!(svg.contains(r##"<use href="#brick" x="30" y="15" class="c0" opacity="1" />"##));
        assert!(svg.contains(r#"attributeName="x" values="5;6""#));
        assert!(svg.contains(r#"attributeName="cx" values="10;20""#));
        assert!(svg.contains(r#"attributeName="cy" values="30;40""#));
        assert!(svg.contains("translate(0,217)"));
        assert_eq!(svg.matches("repeatCount=\"indefinite\"").count(), 4);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_ghost_brick_empties_to_base_color() {
        let options = options(PaletteChoice::GithubLight);
        let arena = options.layout.arena(1);
        let bricks = vec![Brick::new(DVec2::new(15.0, 15.0), 4, true)];
        let tl = timeline(vec![Some(Transition {
            at: 1.0,
            effect: BrickEffect::Empty,
        })]);
        let svg = render(&bricks, &tl, &arena, &options);

        assert!(svg.contains(r##"values="#216e39;#216e39;#ebedf0;#ebedf0""##));
        assert!(svg.contains(r#"keyTimes="0;1.0000;1.0000;1""#));
    }

    #[test]
    fn test_static_document_has_no_animation() {
        let options = options(PaletteChoice::GithubLight);
        let arena = options.layout.arena(4);
        let svg = render(&[], &Timeline::default(), &arena, &options);

        assert!(!svg.contains("<animate"));
        assert!(svg.contains(&format!(r#"cx="{}""#, arena.width / 2.0)));
        // Paddle centred: (87 - 75) / 2
        assert!(svg.contains(r#"<rect x="6" y="0" width="75""#));
    }

    #[test]
    fn test_custom_colors() {
        let mut options = options(PaletteChoice::Custom("#000,#111,#222,#333,#444".parse().unwrap()));
        options.paddle_color = "red".to_string();
        options.ball_color = "blue".to_string();
        let arena = options.layout.arena(3);
        let svg = render(&[], &timeline(vec![]), &arena, &options);

        assert!(svg.contains(".c4{fill:#444}"));
        assert!(svg.contains(r#"fill="red""#));
        assert!(svg.contains(r#"<circle r="8" fill="blue">"#));
    }

    #[test]
    fn test_minify() {
        let svg = "<svg>\n  <g>\n    <rect  x=\"1\"/>\n  </g>\n</svg>\n";
        assert_eq!(minify(svg), "<svg><g><rect x=\"1\"/></g></svg>");
    }
}
