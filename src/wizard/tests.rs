use super::*;
use crate::schema::{fields, FieldKey};
use crate::test_support::ScriptedPrompter;

const HG38: [&str; 15] = [
    "BSgenome.Hsapiens.UCSC.hg38",
    "Full genome sequences for Homo sapiens (UCSC version hg38)",
    "",
    "1.0.0",
    "Homo sapiens",
    "Human",
    "",
    "",
    "Dec. 2013",
    "",
    "",
    "",
    "c(\"chrM\")",
    "/data/hg38",
    "genome.fa",
];

#[test]
fn full_pass_collects_every_field_and_accepts_suggestions() {
    let fields = fields();
    let mut prompter = ScriptedPrompter::new(&HG38);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");

    assert_eq!(answers.len(), 15);
    assert_eq!(answers[&FieldKey::Genome], "hg38");
    assert_eq!(answers[&FieldKey::Provider], "UCSC");
    assert_eq!(answers[&FieldKey::BsgenomeObjname], "Hsapiens");
    assert_eq!(answers[&FieldKey::OrganismBiocview], "Homo_sapiens");
    assert_eq!(answers[&FieldKey::Description], "");
    assert_eq!(
        prompter.defaults_for(FieldKey::Genome),
        vec![Some("hg38".to_string())]
    );
    assert!(prompter.saw_notice("I suggest this field set to: UCSC"));
    assert!(prompter.saw_notice("The package name is valid."));
}

#[test]
fn suggestions_can_be_overridden() {
    let fields = fields();
    let mut script = HG38;
    script[6] = "GRCh38.p14";
    script[7] = "NCBI";
    script[11] = "Homo";
    let mut prompter = ScriptedPrompter::new(&script);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");
    assert_eq!(answers[&FieldKey::Genome], "GRCh38.p14");
    assert_eq!(answers[&FieldKey::Provider], "NCBI");
    assert_eq!(answers[&FieldKey::BsgenomeObjname], "Homo");
}

#[test]
fn invalid_package_reprompts_without_advancing() {
    let fields = fields();
    let mut script = vec!["Foo.A.B.C", "BSgenome.Hsapiens.UCSC", "BSgenome.A.B.c/d"];
    script.extend_from_slice(&HG38);
    let mut prompter = ScriptedPrompter::new(&script);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");

    assert_eq!(answers[&FieldKey::Package], "BSgenome.Hsapiens.UCSC.hg38");
    assert_eq!(prompter.defaults_for(FieldKey::Package).len(), 4);
    assert_eq!(
        prompter
            .notices
            .iter()
            .filter(|notice| notice.starts_with("Not a valid name!"))
            .count(),
        3
    );
}

#[test]
fn back_at_first_question_stays_put() {
    let fields = fields();
    let mut session = WizardSession::new(&fields);
    assert_eq!(session.submit("BACK"), Transition::AtStart);
    assert_eq!(session.position(), 0);
    assert!(session.answers().is_empty());
}

#[test]
fn wizard_reports_back_at_first_question() {
    let fields = fields();
    let mut script = vec!["back", "Back"];
    script.extend_from_slice(&HG38);
    let mut prompter = ScriptedPrompter::new(&script);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");

    assert_eq!(answers[&FieldKey::Package], HG38[0]);
    assert_eq!(prompter.defaults_for(FieldKey::Package).len(), 3);
    assert_eq!(
        prompter
            .notices
            .iter()
            .filter(|notice| notice.starts_with("Already at the first question"))
            .count(),
        2
    );
}

#[test]
fn back_decrements_and_keeps_answers() {
    let fields = fields();
    let mut session = WizardSession::new(&fields);
    assert!(matches!(
        session.submit("BSgenome.Hsapiens.UCSC.hg38"),
        Transition::Accepted { .. }
    ));
    assert!(matches!(session.submit("A title"), Transition::Accepted { .. }));
    assert_eq!(session.position(), 2);

    assert_eq!(session.submit("  back "), Transition::Back);
    assert_eq!(session.position(), 1);
    assert_eq!(session.answers()[&FieldKey::Title], "A title");
    assert_eq!(session.displayed_default().as_deref(), Some("A title"));
    assert_eq!(session.suggestion(), None);

    assert_eq!(session.submit("back"), Transition::Back);
    assert_eq!(session.position(), 0);
    assert_eq!(
        session.answers()[&FieldKey::Package],
        "BSgenome.Hsapiens.UCSC.hg38"
    );
}

#[test]
fn revisited_step_defaults_to_previous_answer() {
    let fields = fields();
    let mut session = WizardSession::new(&fields);
    session.submit("BSgenome.Hsapiens.UCSC.hg38");
    session.submit("back");
    assert_eq!(
        session.submit(""),
        Transition::Accepted {
            notice: Some("The package name is valid.".to_string())
        }
    );
    assert_eq!(
        session.answers()[&FieldKey::Package],
        "BSgenome.Hsapiens.UCSC.hg38"
    );
}

#[test]
fn resubmitting_after_back_overwrites_once() {
    let fields = fields();
    let mut script: Vec<&str> = HG38[..3].to_vec();
    script.extend(["back", "back", "Corrected title", ""]);
    script.extend_from_slice(&HG38[3..]);
    let mut prompter = ScriptedPrompter::new(&script);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");

    assert_eq!(answers[&FieldKey::Title], "Corrected title");
    assert_eq!(answers.len(), 15);
    assert_eq!(
        prompter.defaults_for(FieldKey::Title),
        vec![
            None,
            Some("Full genome sequences for Homo sapiens (UCSC version hg38)".to_string())
        ]
    );
}

#[test]
fn stale_answers_survive_until_resubmitted() {
    let fields = fields();
    let mut session = WizardSession::new(&fields);
    session.submit("BSgenome.Hsapiens.UCSC.hg38");
    session.submit("Title");
    session.submit("Description");
    session.submit("back");
    session.submit("back");
    assert_eq!(session.position(), 1);
    assert_eq!(session.answers()[&FieldKey::Description], "Description");
}

#[test]
fn changed_package_refreshes_unvisited_suggestions() {
    let fields = fields();
    let mut script: Vec<&str> = vec!["BSgenome.Mmusculus.UCSC.mm10", "back"];
    script.extend_from_slice(&HG38);
    let mut prompter = ScriptedPrompter::new(&script);
    let answers = run_wizard(&fields, &mut prompter).expect("wizard completes");
    assert_eq!(answers[&FieldKey::Genome], "hg38");
}

#[test]
fn exhausted_input_is_an_error() {
    let fields = fields();
    let mut prompter = ScriptedPrompter::new(&HG38[..4]);
    assert!(run_wizard(&fields, &mut prompter).is_err());
}

#[test]
fn unfinished_session_cannot_finish() {
    let fields = fields();
    let session = WizardSession::new(&fields);
    assert!(session.finish().is_err());
}
