use isbm_rs::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn simple() {
    const SRC: &str = r"
// Boss Fight (main chart)
beatname;BossFight
bpm;120

note;4;0;0;0;100.0;200.0;0.0
note;4;0;0;1;150.0;200.0;45.0
note;8;10;1;14;0.5;0.5;90.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);

    assert_eq!(warnings, vec![]);
    assert_eq!(
        beatmap,
        Beatmap {
            name: "Boss Fight".into(),
            notes: vec![
                Note {
                    line: 6,
                    fraction: 0.25,
                    position: 0.25,
                    bpm_override: Some(120),
                    offset_ms: 0,
                    shadow_x: 100.0,
                    shadow_y: 200.0,
                    angle: 0.0,
                    target_beat: 0.25,
                    rest: false,
                    rest_size: 1,
                    kind: NoteKind::Button,
                    button: NoteButton::A,
                },
                Note {
                    line: 7,
                    fraction: 0.25,
                    position: 0.5,
                    bpm_override: Some(120),
                    offset_ms: 0,
                    shadow_x: 150.0,
                    shadow_y: 200.0,
                    angle: 45.0,
                    target_beat: 0.5,
                    rest: false,
                    rest_size: 1,
                    kind: NoteKind::Button,
                    button: NoteButton::B,
                },
                Note {
                    line: 8,
                    fraction: 0.125,
                    position: 0.625,
                    bpm_override: Some(120),
                    offset_ms: 10,
                    shadow_x: 0.5,
                    shadow_y: 0.5,
                    angle: 90.0,
                    target_beat: 0.625,
                    rest: false,
                    rest_size: 1,
                    kind: NoteKind::Axis,
                    button: NoteButton::Empty,
                },
            ],
        }
    );
}

#[test]
fn positions_are_a_running_sum_in_file_order() {
    const SRC: &str = r"
note;4;0;0;0;0.0;0.0;0.0
note;2;0;0;0;0.0;0.0;0.0
note;8;0;0;0;0.0;0.0;0.0
note;8;0;0;0;0.0;0.0;0.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(warnings, vec![]);

    let positions: Vec<f32> = beatmap.notes.iter().map(|note| note.position).collect();
    assert_eq!(positions, vec![0.25, 0.75, 0.875, 1.0]);

    let mut sum = 0.0;
    for note in &beatmap.notes {
        sum += note.fraction;
        assert_eq!(note.position, sum);
    }
}

#[test]
fn short_declarations_are_dropped_silently() {
    // The first note never reaches 7 arguments: its leftovers on the next
    // line belong to a different line number and attach to nothing.
    const SRC: &str = r"
note;4;0;0
0;100.0;200.0;0.0
note;4;0;0;0;100.0;200.0;0.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.notes.len(), 1);
    assert_eq!(beatmap.notes[0].line, 4);
    assert_eq!(beatmap.notes[0].position, 0.25);
}

#[test]
fn same_line_declarations_share_arguments() {
    const SRC: &str = "note;note;4;0;0;0;1.0;2.0;3.0";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.notes.len(), 2);

    // Both notes got the same seven arguments, in declaration order, with
    // the running position still accumulating across them.
    assert_eq!(beatmap.notes[0].fraction, 0.25);
    assert_eq!(beatmap.notes[0].position, 0.25);
    assert_eq!(beatmap.notes[1].fraction, 0.25);
    assert_eq!(beatmap.notes[1].position, 0.5);
    assert_eq!(beatmap.notes[0].shadow_x, 1.0);
    assert_eq!(beatmap.notes[1].shadow_x, 1.0);
}

#[test]
fn tempo_applies_to_later_declarations_only() {
    const SRC: &str = r"
note;4;0;0;0;0.0;0.0;0.0
bpm;90
note;4;0;0;0;0.0;0.0;0.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.notes[0].bpm_override, Some(DEFAULT_TEMPO));
    assert_eq!(beatmap.notes[1].bpm_override, Some(90));
}

#[test]
fn name_expansion_tolerates_already_spaced_names() {
    // Spaces are stripped before tokenizing, so a pre-spaced name collapses
    // and expands back without doubling.
    let spaced = parse_chart("beatname;Boss Fight").beatmap;
    let packed = parse_chart("beatname;BossFight").beatmap;
    assert_eq!(spaced.name, "Boss Fight");
    assert_eq!(spaced.name, packed.name);

    let single = parse_chart("beatname;A").beatmap;
    assert_eq!(single.name, "A");
}

#[test]
fn unconvertible_notes_warn_and_drop() {
    const SRC: &str = r"
note;4;0;0;0;oops;200.0;0.0
note;4;0;0;9;1.0;2.0;3.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(beatmap.notes.len(), 1);
    // The dropped note contributes nothing to the running position.
    assert_eq!(beatmap.notes[0].position, 0.25);
    assert_eq!(
        warnings,
        vec![ParseWarning::InvalidNumericLiteral {
            line: 2,
            field: "shadow x",
            literal: "oops".into(),
        }]
    );
}

#[test]
fn invalid_tempo_keeps_the_previous_default() {
    const SRC: &str = r"
bpm;fast
note;4;0;0;0;0.0;0.0;0.0
";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(
        warnings,
        vec![ParseWarning::InvalidTempo {
            line: 2,
            literal: "fast".into(),
        }]
    );
    assert_eq!(beatmap.notes[0].bpm_override, Some(DEFAULT_TEMPO));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    const SRC: &str = "// header\n\n   \n// note;4;0;0;0;0.0;0.0;0.0\n";

    let ChartOutput { beatmap, warnings } = parse_chart(SRC);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap, Beatmap::default());
}

#[test]
fn custom_syntax_is_respected() {
    let syntax = Syntax {
        delimiter: ",".into(),
        comment_prefix: "#".into(),
        note_key: "n".into(),
        name_key: "title".into(),
        tempo_key: "tempo".into(),
    };

    const SRC: &str = "# custom dialect\ntitle,LastDance\ntempo,150\nn,4,0,0,0,10.0,20.0,0.0";

    let ChartOutput { beatmap, warnings } = parse_chart_with_syntax(SRC, &syntax);
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.name, "Last Dance");
    assert_eq!(beatmap.notes.len(), 1);
    assert_eq!(beatmap.notes[0].bpm_override, Some(150));
}
