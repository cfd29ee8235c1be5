//! Property-based tests for instruction parsing
//!
//! Tests field parsing, color syntax and rectangle normalisation against
//! arbitrary inputs.

use pdf_drawer::instructions::{Fields, LineKind};
use pdf_drawer::{Color, DrawOperation, Instruction, Rectangle};
use proptest::prelude::*;

// Strategy for finite coordinates
fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0..1000.0f64,
        Just(0.0),
        Just(-0.5),
        Just(612.0),
        Just(842.0),
    ]
}

fn color_component() -> impl Strategy<Value = f64> {
    prop_oneof![0.0..=1.0f64, Just(0.0), Just(1.0), -2.0..2.0f64]
}

prop_compose! {
    fn color_strategy()(
        r in color_component(),
        g in color_component(),
        b in color_component()
    ) -> Color {
        Color::rgb(r, g, b)
    }
}

proptest! {
    #[test]
    fn test_color_display_parses_back(color in color_strategy()) {
        let parsed: Color = color.to_string().parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn test_color_tolerates_whitespace(color in color_strategy(), pad in "[ ]{0,3}") {
        let text = format!("{pad}rgb({pad}{}{pad},{}, {pad}{}){pad}", color.r, color.g, color.b);
        let parsed: Color = text.parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn test_non_rgb_colors_are_rejected(text in "[a-z#0-9,() ]{0,16}") {
        prop_assume!(!text.trim().starts_with("rgb("));
        prop_assert!(text.parse::<Color>().is_err());
    }

    #[test]
    fn test_line_coordinates_survive_parsing(
        page in 1u32..10_000,
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let line = format!("L\t{page}\t{x0}\t{y0}\t{x1}\t{y1}");
        let instruction = Instruction::parse(&line).unwrap().unwrap();
        prop_assert_eq!(instruction.page, page);

        match instruction.operation {
            DrawOperation::Line(params) => {
                prop_assert_eq!((params.x0, params.y0, params.x1, params.y1), (x0, y0, x1, y1));
            }
            other => prop_assert!(false, "expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_lines_never_become_content(
        marker in prop_oneof![Just('%'), Just('#')],
        body in "[ -~\t]{0,40}",
        indent in "[ \t]{0,3}"
    ) {
        let line = format!("{indent}{marker}{body}");
        prop_assert_eq!(LineKind::of(&line), LineKind::Comment);
    }

    #[test]
    fn test_absent_fields_never_fail(count in 0usize..12, index in 0usize..20) {
        let line = vec!["1"; count].join("\t");
        let fields = Fields::split(&line);
        prop_assert_eq!(fields.get_or(index + count, "x0", 3.5).unwrap(), 3.5);
    }

    #[test]
    fn test_rectangle_corners_are_normalised(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let rect = Rectangle::new(x0, y0, x1, y1);
        prop_assert!(rect.top_left.x <= rect.bottom_right.x);
        prop_assert!(rect.top_left.y <= rect.bottom_right.y);
        prop_assert_eq!(rect, Rectangle::new(x1, y1, x0, y0));
    }

    #[test]
    fn test_clamped_rectangle_stays_on_page(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(),
        width in 1.0..2000.0f64, height in 1.0..2000.0f64
    ) {
        let rect = Rectangle::new(x0, y0, x1, y1).clamp_to(width, height);
        prop_assert!(rect.top_left.x >= 0.0 && rect.bottom_right.x <= width);
        prop_assert!(rect.top_left.y >= 0.0 && rect.bottom_right.y <= height);
        prop_assert!(rect.width() >= 0.0 && rect.height() >= 0.0);
    }
}
