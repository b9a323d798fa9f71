use clinical_model::{
    ClinicalData, ClinicalEntityType, CompletionColumn, DonorId, ErrorKind, ErrorValue, ProgramId,
};

#[test]
fn donor_id_parses_both_forms() {
    let bare = DonorId::parse("262500").unwrap();
    let prefixed = DonorId::parse("DO262500").unwrap();
    assert_eq!(bare, prefixed);
    assert_eq!(bare.value(), 262500);
    assert_eq!(bare.display_value(), "DO262500");
}

#[test]
fn donor_id_rejects_garbage() {
    assert!(DonorId::parse("").is_err());
    assert!(DonorId::parse("DO").is_err());
    assert!(DonorId::parse("donor-1").is_err());
}

#[test]
fn program_id_requires_content() {
    assert!(ProgramId::new("  ").is_err());
    assert_eq!(ProgramId::new(" PACA-AU ").unwrap().as_str(), "PACA-AU");
}

#[test]
fn error_kind_round_trips() {
    for code in [
        "INVALID_BY_SCRIPT",
        "INVALID_ENUM_VALUE",
        "INVALID_BY_REGEX",
        "UNRECOGNIZED_FIELD",
        "MISSING_REQUIRED_FIELD",
    ] {
        assert_eq!(ErrorKind::parse(code).as_str(), code);
    }
    let unknown = ErrorKind::parse("FUTURE_CHECK");
    assert_eq!(unknown, ErrorKind::Other("FUTURE_CHECK".to_string()));
    assert_eq!(unknown.as_str(), "FUTURE_CHECK");
}

#[test]
fn error_kind_annotation_predicates() {
    assert!(ErrorKind::InvalidByScript.marks_value());
    assert!(ErrorKind::InvalidEnumValue.marks_value());
    assert!(!ErrorKind::InvalidByRegex.marks_value());
    assert!(ErrorKind::UnrecognizedField.marks_field());
    assert!(ErrorKind::MissingRequiredField.marks_field());
    assert!(!ErrorKind::InvalidByScript.marks_field());
}

#[test]
fn entity_alias_resolution() {
    assert!(ClinicalEntityType::SampleRegistration.matches("registration"));
    assert!(ClinicalEntityType::SampleRegistration.matches("sample_registration"));
    assert!(!ClinicalEntityType::SampleRegistration.matches("donor"));
    assert_eq!(
        "registration".parse::<ClinicalEntityType>().unwrap(),
        ClinicalEntityType::SampleRegistration
    );
    assert_eq!(
        "follow_ups".parse::<ClinicalEntityType>().unwrap(),
        ClinicalEntityType::FollowUp
    );
    assert!("not_an_entity".parse::<ClinicalEntityType>().is_err());
}

#[test]
fn completion_columns_fixed_order() {
    let codes: Vec<&str> = CompletionColumn::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec!["DO", "PD", "NS", "TS", "TR", "FO"]);
    assert_eq!(
        CompletionColumn::from_code("NS"),
        Some(CompletionColumn::NormalSpecimens)
    );
    assert_eq!(CompletionColumn::from_code("XX"), None);
}

#[test]
fn clinical_data_deserializes_wire_shape() {
    let payload = serde_json::json!({
        "clinicalEntities": [
            {
                "entityName": "donor",
                "totalDocs": 1,
                "entityFields": ["donor_id", "vital_status"],
                "records": [
                    [
                        {"name": "donor_id", "value": "262500"},
                        {"name": "vital_status", "value": null}
                    ]
                ],
                "completionStats": [
                    {
                        "donorId": 262500,
                        "coreCompletion": {
                            "donor": 1.0,
                            "primaryDiagnosis": 0.5,
                            "specimens": 0.0,
                            "followUps": 0.0,
                            "treatments": 1.0
                        },
                        "entityData": {
                            "specimens": {
                                "coreCompletionPercentage": 0.5,
                                "normalSpecimensPercentage": 1.0,
                                "tumourSpecimensPercentage": 0.0,
                                "normalSubmissions": 2.0,
                                "tumourSubmissions": 0.0,
                                "normalRegistrations": 2.0,
                                "tumourRegistrations": 1.0
                            }
                        }
                    }
                ]
            }
        ],
        "clinicalErrors": [
            {
                "donorId": 262500,
                "submitterDonorId": "ICGC_71",
                "errors": [
                    {
                        "entityName": "donor",
                        "errorType": "INVALID_ENUM_VALUE",
                        "fieldName": "vital_status",
                        "message": "Value is not permissible for this field.",
                        "index": 0,
                        "info": {"value": "Unknwn"}
                    }
                ]
            }
        ]
    });

    let data: ClinicalData = serde_json::from_value(payload).unwrap();
    let block = data.entity(ClinicalEntityType::Donor).unwrap();
    assert_eq!(block.total_docs, 1);
    assert_eq!(block.records[0].get("donor_id"), Some("262500"));
    assert_eq!(block.records[0].get("vital_status"), None);

    let stats = block.completion_stats.as_ref().unwrap();
    assert_eq!(stats[0].donor_id, DonorId::new(262500));
    let specimens = stats[0].specimens().unwrap();
    assert_eq!(specimens.normal_submissions, 2.0);

    let error = &data.clinical_errors[0].errors[0];
    assert_eq!(error.error_type, ErrorKind::InvalidEnumValue);
    assert_eq!(
        error.info.value,
        Some(ErrorValue::One("Unknwn".to_string()))
    );
}

#[test]
fn completion_stat_without_entity_data() {
    let payload = serde_json::json!({
        "donorId": 7,
        "coreCompletion": {
            "donor": 0.0,
            "primaryDiagnosis": 0.0,
            "specimens": 0.0,
            "followUps": 0.0,
            "treatments": 0.0
        }
    });
    let stat: clinical_model::CompletionStat = serde_json::from_value(payload).unwrap();
    assert!(stat.specimens().is_none());
}

#[test]
fn error_value_array_form() {
    let many: ErrorValue =
        serde_json::from_value(serde_json::json!(["first", "second"])).unwrap();
    assert_eq!(many.primary(), Some("first"));
    let one: ErrorValue = serde_json::from_value(serde_json::json!("only")).unwrap();
    assert_eq!(one.primary(), Some("only"));
}
