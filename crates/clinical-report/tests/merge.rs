//! Tests for the record/completion merge, column derivation, and row
//! ordering.

use clinical_model::{
    ClinicalEntityType, ClinicalRecordField, CompletionColumn, CompletionStat, CoreCompletion,
    DonorErrorGroup, DonorId, EntityData, EntityRecord, SpecimenCompletion,
};
use clinical_report::{
    CellValue, ColumnKey, CompletionValue, SortDirection, TableSort, merge_records, sort_rows,
    table_columns,
};

fn make_record(fields: &[(&str, Option<&str>)]) -> EntityRecord {
    EntityRecord::new(
        fields
            .iter()
            .map(|(name, value)| ClinicalRecordField {
                name: (*name).to_string(),
                value: value.map(str::to_string),
            })
            .collect(),
    )
}

fn make_stat(donor_id: u64, core: CoreCompletion, specimens: SpecimenCompletion) -> CompletionStat {
    CompletionStat {
        donor_id: DonorId::new(donor_id),
        core_completion: core,
        entity_data: Some(EntityData {
            specimens: Some(specimens),
        }),
    }
}

fn completion(row: &clinical_report::TableRow, column: CompletionColumn) -> CompletionValue {
    *row.completion(column).expect("completion cell")
}

#[test]
fn donor_without_stat_gets_zeroed_columns() {
    let records = vec![make_record(&[("donor_id", Some("262500"))])];
    let rows = merge_records(&records, Some(&[]), ClinicalEntityType::Donor);

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].field("donor_id"),
        Some(&CellValue::Text("DO262500".to_string()))
    );
    for column in CompletionColumn::ALL {
        assert_eq!(completion(&rows[0], column), CompletionValue::Fraction(0.0));
    }
}

#[test]
fn donor_id_prefix_round_trips() {
    let records = vec![make_record(&[("donor_id", Some("98765"))])];
    let rows = merge_records(&records, None, ClinicalEntityType::Donor);
    let Some(CellValue::Text(display)) = rows[0].field("donor_id") else {
        panic!("donor_id cell missing");
    };
    assert!(display.starts_with("DO"));
    assert_eq!(display[2..].parse::<u64>().unwrap(), 98765);
    assert_eq!(rows[0].donor_id(), Some(DonorId::new(98765)));
}

#[test]
fn matched_stat_populates_core_columns() {
    let core = CoreCompletion {
        donor: 1.0,
        primary_diagnosis: 0.5,
        specimens: 0.0,
        follow_ups: 0.0,
        treatments: 1.0,
    };
    let specimens = SpecimenCompletion {
        core_completion_percentage: 0.0,
        normal_specimens_percentage: 1.0,
        tumour_specimens_percentage: 0.5,
        normal_submissions: 3.0,
        tumour_submissions: 2.0,
        normal_registrations: 3.0,
        tumour_registrations: 4.0,
    };
    let stats = vec![make_stat(11, core, specimens)];
    let records = vec![make_record(&[("donor_id", Some("11"))])];

    let rows = merge_records(&records, Some(&stats), ClinicalEntityType::Donor);
    let row = &rows[0];
    assert_eq!(
        completion(row, CompletionColumn::Donor),
        CompletionValue::Fraction(1.0)
    );
    assert_eq!(
        completion(row, CompletionColumn::PrimaryDiagnosis),
        CompletionValue::Fraction(0.5)
    );
    assert_eq!(
        completion(row, CompletionColumn::Treatments),
        CompletionValue::Fraction(1.0)
    );
    assert_eq!(
        completion(row, CompletionColumn::FollowUps),
        CompletionValue::Fraction(0.0)
    );
    // Normal side is complete on its own percentage; tumour side shows
    // the submission count.
    assert_eq!(
        completion(row, CompletionColumn::NormalSpecimens),
        CompletionValue::Fraction(1.0)
    );
    assert_eq!(
        completion(row, CompletionColumn::TumourSpecimens),
        CompletionValue::Submissions(2.0)
    );
}

#[test]
fn specimen_core_percentage_short_circuits_both_sides() {
    let specimens = SpecimenCompletion {
        core_completion_percentage: 1.0,
        normal_specimens_percentage: 0.25,
        tumour_specimens_percentage: 0.0,
        normal_submissions: 1.0,
        tumour_submissions: 0.0,
        normal_registrations: 4.0,
        tumour_registrations: 2.0,
    };
    let stats = vec![make_stat(5, CoreCompletion::default(), specimens)];
    let records = vec![make_record(&[("donor_id", Some("5"))])];

    let rows = merge_records(&records, Some(&stats), ClinicalEntityType::Donor);
    assert_eq!(
        completion(&rows[0], CompletionColumn::NormalSpecimens),
        CompletionValue::Fraction(1.0)
    );
    assert_eq!(
        completion(&rows[0], CompletionColumn::TumourSpecimens),
        CompletionValue::Fraction(1.0)
    );
}

#[test]
fn stat_without_specimen_detail_counts_as_no_match() {
    let stats = vec![CompletionStat {
        donor_id: DonorId::new(3),
        core_completion: CoreCompletion {
            donor: 1.0,
            primary_diagnosis: 1.0,
            specimens: 1.0,
            follow_ups: 1.0,
            treatments: 1.0,
        },
        entity_data: None,
    }];
    let records = vec![make_record(&[("donor_id", Some("3"))])];

    let rows = merge_records(&records, Some(&stats), ClinicalEntityType::Donor);
    for column in CompletionColumn::ALL {
        assert_eq!(completion(&rows[0], column), CompletionValue::Fraction(0.0));
    }
}

#[test]
fn record_without_donor_id_skips_completion() {
    let records = vec![make_record(&[("submitter_id", Some("S1"))])];
    let rows = merge_records(&records, Some(&[]), ClinicalEntityType::Donor);
    for column in CompletionColumn::ALL {
        assert!(rows[0].completion(column).is_none());
    }
}

#[test]
fn non_donor_entities_never_get_completion_columns() {
    let records = vec![make_record(&[("donor_id", Some("8"))])];
    let rows = merge_records(&records, Some(&[]), ClinicalEntityType::Specimen);
    for column in CompletionColumn::ALL {
        assert!(rows[0].completion(column).is_none());
    }
}

#[test]
fn missing_values_display_as_empty() {
    let records = vec![make_record(&[("vital_status", None)])];
    let rows = merge_records(&records, None, ClinicalEntityType::Donor);
    assert_eq!(rows[0].field("vital_status"), Some(&CellValue::Missing));
    assert_eq!(rows[0].field("vital_status").unwrap().display(), "");
}

#[test]
fn columns_union_declared_then_first_seen() {
    let records = vec![
        make_record(&[("donor_id", Some("1")), ("extra_b", Some("x"))]),
        make_record(&[("extra_a", Some("y")), ("donor_id", Some("2"))]),
    ];
    let declared = vec!["donor_id".to_string(), "vital_status".to_string()];

    let columns = table_columns(&declared, &records, ClinicalEntityType::Donor);
    let headers: Vec<&str> = columns.iter().map(|column| column.header()).collect();
    assert_eq!(
        headers,
        vec![
            "DO",
            "PD",
            "NS",
            "TS",
            "TR",
            "FO",
            "donor_id",
            "vital_status",
            "extra_b",
            "extra_a",
        ]
    );

    let specimen_columns = table_columns(&declared, &records, ClinicalEntityType::Specimen);
    assert!(
        specimen_columns
            .iter()
            .all(|column| matches!(column, ColumnKey::Field(_)))
    );
}

fn error_group(donor_id: u64) -> DonorErrorGroup {
    DonorErrorGroup {
        donor_id: DonorId::new(donor_id),
        submitter_donor_id: None,
        errors: Vec::new(),
    }
}

#[test]
fn errored_donors_sort_first() {
    let records = vec![
        make_record(&[("donor_id", Some("1"))]),
        make_record(&[("donor_id", Some("2"))]),
        make_record(&[("donor_id", Some("3"))]),
    ];
    let mut rows = merge_records(&records, Some(&[]), ClinicalEntityType::Donor);
    let groups = vec![error_group(3)];

    sort_rows(&mut rows, &groups, None);
    assert_eq!(rows[0].donor_id(), Some(DonorId::new(3)));
    // Ties keep input order.
    assert_eq!(rows[1].donor_id(), Some(DonorId::new(1)));
    assert_eq!(rows[2].donor_id(), Some(DonorId::new(2)));
}

#[test]
fn completion_sort_respects_direction() {
    let stats = vec![
        make_stat(
            1,
            CoreCompletion {
                donor: 0.25,
                ..CoreCompletion::default()
            },
            SpecimenCompletion::default(),
        ),
        make_stat(
            2,
            CoreCompletion {
                donor: 1.0,
                ..CoreCompletion::default()
            },
            SpecimenCompletion::default(),
        ),
        make_stat(
            3,
            CoreCompletion {
                donor: 0.5,
                ..CoreCompletion::default()
            },
            SpecimenCompletion::default(),
        ),
    ];
    let records = vec![
        make_record(&[("donor_id", Some("1"))]),
        make_record(&[("donor_id", Some("2"))]),
        make_record(&[("donor_id", Some("3"))]),
    ];
    let mut rows = merge_records(&records, Some(&stats), ClinicalEntityType::Donor);

    let sort = TableSort::parse("-DO").unwrap();
    assert_eq!(sort.column, CompletionColumn::Donor);
    assert_eq!(sort.direction, SortDirection::Descending);
    sort_rows(&mut rows, &[], Some(&sort));
    let order: Vec<u64> = rows
        .iter()
        .map(|row| row.donor_id().unwrap().value())
        .collect();
    assert_eq!(order, vec![2, 3, 1]);

    let ascending = TableSort::parse("DO").unwrap();
    sort_rows(&mut rows, &[], Some(&ascending));
    let order: Vec<u64> = rows
        .iter()
        .map(|row| row.donor_id().unwrap().value())
        .collect();
    assert_eq!(order, vec![1, 3, 2]);
}

#[test]
fn error_priority_applies_before_sort_column() {
    let stats = vec![
        make_stat(
            1,
            CoreCompletion {
                donor: 1.0,
                ..CoreCompletion::default()
            },
            SpecimenCompletion::default(),
        ),
        make_stat(2, CoreCompletion::default(), SpecimenCompletion::default()),
    ];
    let records = vec![
        make_record(&[("donor_id", Some("1"))]),
        make_record(&[("donor_id", Some("2"))]),
    ];
    let mut rows = merge_records(&records, Some(&stats), ClinicalEntityType::Donor);

    // Donor 2 has errors, so it leads even under a descending DO sort.
    let sort = TableSort::parse("-DO").unwrap();
    sort_rows(&mut rows, &[error_group(2)], Some(&sort));
    assert_eq!(rows[0].donor_id(), Some(DonorId::new(2)));
}
