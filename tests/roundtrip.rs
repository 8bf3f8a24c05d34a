//! Property tests for lossless document round-trips.
//!
//! Generated documents go out through the codec and come back in, and the
//! reloaded value must compare equal to the original. This covers field
//! order, list order, defaulted fields, and scalar typing in both YAML
//! and JSON.

use chrono::NaiveDate;
use proptest::prelude::*;

use hansard::{
    codec, Confidence, ContextDocument, DecisionDocument, Enforcement, Fact, FactType, FactValue,
    Format, Impact, Phase, Policy, PolicyStatus, PolicyType, Priority, ReasoningPattern,
};

// -- Arbitrary documents --

fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.'!?-]{0,39}"
}

fn arb_phase() -> impl Strategy<Value = Phase> {
    prop_oneof![
        Just(Phase::Exploration),
        Just(Phase::Analysis),
        Just(Phase::Synthesis),
        Just(Phase::Decision),
    ]
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::MustHave),
        Just(Priority::ShouldHave),
        Just(Priority::NiceToHave),
    ]
}

fn arb_impact() -> impl Strategy<Value = Impact> {
    prop_oneof![
        Just(Impact::Low),
        Just(Impact::Medium),
        Just(Impact::High),
        Just(Impact::Critical),
    ]
}

fn arb_reasoning_pattern() -> impl Strategy<Value = ReasoningPattern> {
    prop_oneof![
        Just(ReasoningPattern::Comparative),
        Just(ReasoningPattern::CostBenefit),
        Just(ReasoningPattern::RiskBased),
        Just(ReasoningPattern::Consensus),
        Just(ReasoningPattern::Systematic),
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date"))
}

fn arb_decision_document() -> impl Strategy<Value = DecisionDocument> {
    (
        (arb_text(), arb_text(), arb_text()),
        prop::collection::vec((arb_text(), prop::option::of(arb_text()), any::<bool>()), 0..3),
        prop::collection::vec((arb_text(), prop::option::of(arb_priority()), any::<bool>()), 0..3),
        prop::option::of((arb_phase(), 0..=100u8)),
        prop::collection::vec(arb_reasoning_pattern(), 0..3),
        prop::collection::vec((arb_text(), any::<bool>(), prop::option::of(0..=100u8)), 0..3),
        prop::collection::vec((arb_text(), arb_impact()), 0..3),
        prop::option::of((
            arb_text(),
            arb_text(),
            prop::collection::vec((arb_text(), arb_text()), 0..2),
            prop::collection::vec((arb_text(), prop::option::of(arb_date())), 0..2),
        )),
    )
        .prop_map(
            |(core, constraints, objectives, phase, patterns, assumptions, tensions, synthesis)| {
                let (title, domain, intent) = core;
                let mut doc = DecisionDocument::new(title, domain, intent);
                for (description, source, negotiable) in constraints {
                    doc = doc.add_constraint(description, source.as_deref(), negotiable);
                }
                for (description, priority, measurable) in objectives {
                    doc = doc.add_objective(description, priority, measurable);
                }
                if let Some((phase, confidence)) = phase {
                    doc = doc.set_phase(phase, confidence).expect("confidence in range");
                }
                for pattern in patterns {
                    doc = doc.add_reasoning_pattern(pattern);
                }
                for (description, validated, confidence) in assumptions {
                    doc = doc
                        .add_assumption(description, validated, confidence, None)
                        .expect("confidence in range");
                }
                for (description, impact) in tensions {
                    doc = doc.add_tension(description, impact, None);
                }
                if let Some((decision, rationale, alternatives, follow_ups)) = synthesis {
                    doc = doc.synthesize(decision, rationale);
                    for (alt, against) in alternatives {
                        doc = doc
                            .add_alternative(alt, against, None)
                            .expect("synthesis was recorded above");
                    }
                    for (action, due_date) in follow_ups {
                        doc = doc
                            .add_follow_up(action, None, due_date)
                            .expect("synthesis was recorded above");
                    }
                }
                doc
            },
        )
}

fn arb_policy_status() -> impl Strategy<Value = PolicyStatus> {
    prop_oneof![
        Just(PolicyStatus::Proposed),
        Just(PolicyStatus::Active),
        Just(PolicyStatus::Deprecated),
        Just(PolicyStatus::Retired),
    ]
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        arb_text(),
        arb_text(),
        arb_policy_status(),
        prop::option::of(prop_oneof![
            Just(PolicyType::Governance),
            Just(PolicyType::Security),
            Just(PolicyType::Architectural),
            Just(PolicyType::Operational),
        ]),
        prop::option::of(prop_oneof![
            Just(Enforcement::Mandatory),
            Just(Enforcement::Recommended),
            Just(Enforcement::Advisory),
        ]),
        prop::option::of(arb_text()),
    )
        .prop_map(
            |(name, description, status, policy_type, enforcement, scope)| {
                let mut policy = Policy::new(name, description, status);
                if let Some(policy_type) = policy_type {
                    policy = policy.with_type(policy_type);
                }
                if let Some(enforcement) = enforcement {
                    policy = policy.with_enforcement(enforcement);
                }
                if let Some(scope) = scope {
                    policy = policy.with_scope(scope);
                }
                policy
            },
        )
}

fn arb_fact_type() -> impl Strategy<Value = FactType> {
    prop_oneof![
        Just(FactType::Contract),
        Just(FactType::Budget),
        Just(FactType::Timeline),
        Just(FactType::Constraint),
        Just(FactType::Metric),
        Just(FactType::Event),
        Just(FactType::Status),
    ]
}

fn arb_fact_value() -> impl Strategy<Value = FactValue> {
    prop_oneof![
        any::<bool>().prop_map(FactValue::from),
        (-1_000_000i64..1_000_000).prop_map(FactValue::from),
        (-1.0e6f64..1.0e6).prop_map(FactValue::from),
        arb_text().prop_map(FactValue::from),
    ]
}

fn arb_fact() -> impl Strategy<Value = Fact> {
    (
        arb_text(),
        arb_fact_type(),
        arb_fact_value(),
        prop::option::of(arb_text()),
        prop::option::of(0..=100u8),
        prop::option::of(arb_text()),
    )
        .prop_map(|(name, fact_type, value, unit, confidence, reference)| {
            let mut fact = Fact::new(name, fact_type, value);
            if let Some(unit) = unit {
                fact = fact.with_unit(unit);
            }
            if let Some(confidence) = confidence {
                fact = fact.with_confidence(Confidence::new(confidence).expect("in range"));
            }
            if let Some(reference) = reference {
                fact = fact.with_source_reference(reference);
            }
            fact
        })
}

fn arb_context_document() -> impl Strategy<Value = ContextDocument> {
    (
        prop::option::of(arb_text()),
        prop::collection::vec(arb_policy(), 0..3),
        prop::collection::vec(arb_fact(), 0..3),
    )
        .prop_map(|(source, policies, facts)| {
            let mut doc = match source {
                Some(source) => ContextDocument::from_source(source),
                None => ContextDocument::new(),
            };
            for policy in policies {
                doc = doc.add_policy(policy);
            }
            for fact in facts {
                doc = doc.add_fact(fact);
            }
            doc
        })
}

// -- Properties --

proptest! {
    /// Any buildable decision document survives a YAML round-trip intact.
    #[test]
    fn decision_documents_round_trip_through_yaml(doc in arb_decision_document()) {
        let text = codec::to_string(&doc, Format::Yaml).expect("serialize");
        let reloaded: DecisionDocument = codec::from_str(&text, Format::Yaml).expect("reload");
        prop_assert_eq!(doc, reloaded);
    }

    #[test]
    fn decision_documents_round_trip_through_json(doc in arb_decision_document()) {
        let text = codec::to_string(&doc, Format::Json).expect("serialize");
        let reloaded: DecisionDocument = codec::from_str(&text, Format::Json).expect("reload");
        prop_assert_eq!(doc, reloaded);
    }

    /// Any buildable context document survives a YAML round-trip intact,
    /// including scalar fact values keeping their types.
    #[test]
    fn context_documents_round_trip_through_yaml(doc in arb_context_document()) {
        let text = codec::to_string(&doc, Format::Yaml).expect("serialize");
        let reloaded: ContextDocument = codec::from_str(&text, Format::Yaml).expect("reload");
        prop_assert_eq!(doc, reloaded);
    }

    #[test]
    fn context_documents_round_trip_through_json(doc in arb_context_document()) {
        let text = codec::to_string(&doc, Format::Json).expect("serialize");
        let reloaded: ContextDocument = codec::from_str(&text, Format::Json).expect("reload");
        prop_assert_eq!(doc, reloaded);
    }

    /// Rendering the same document twice produces identical text.
    #[test]
    fn yaml_rendering_is_deterministic(doc in arb_decision_document()) {
        let first = codec::to_string(&doc, Format::Yaml).expect("serialize");
        let second = codec::to_string(&doc, Format::Yaml).expect("serialize");
        prop_assert_eq!(first, second);
    }
}
