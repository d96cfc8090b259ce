//! Tests for domain_claims

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, MedicalAidId, Money, PageRequest, PatientId, Timezone, VisitId};

use domain_claims::claim::{Claim, ClaimStatus, MedicalAid, Patient, PendingClaim};
use domain_claims::export::{
    serialize_rows, serialize_table, DownloadLink, ExportFormat, EXCEL_MIME_TYPE,
};
use domain_claims::table::{ClaimsTable, RowContext, HEADERS};
use domain_claims::ClaimError;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, hour, 30, 0).unwrap()
}

fn medical_aid() -> MedicalAid {
    MedicalAid {
        id: MedicalAidId::new(3),
        name: "Discovery Health".to_string(),
    }
}

fn patient() -> Patient {
    Patient {
        id: PatientId::new(11),
        first_name: "Thandi".to_string(),
        last_name: "Mokoena".to_string(),
        medical_aid_number: "DH0099812".to_string(),
        medical_aid_suffix: "01".to_string(),
    }
}

fn claim(id: i64, visit: i64) -> Claim {
    Claim {
        id: ClaimId::new(id),
        visit_id: VisitId::new(visit),
        medical_aid_id: MedicalAidId::new(3),
        patient_id: PatientId::new(11),
        claim_amount: Money::new(dec!(1450.5), Currency::USD),
        status: ClaimStatus::Pending,
        created_at: at(9),
        updated_at: at(9),
    }
}

fn pending(id: i64, visit: i64) -> PendingClaim {
    PendingClaim::new(claim(id, visit), medical_aid(), patient()).unwrap()
}

fn text(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_full_name_joins_with_single_space() {
        assert_eq!(patient().full_name(), "Thandi Mokoena");
    }

    #[test]
    fn test_status_round_trip_through_column_value() {
        for status in [
            ClaimStatus::Pending,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Paid,
        ] {
            assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status() {
        let err = "queued".parse::<ClaimStatus>().unwrap_err();
        assert!(matches!(err, ClaimError::UnknownStatus(s) if s == "queued"));
    }

    #[test]
    fn test_pending_claim_rejects_non_pending() {
        let mut paid = claim(1, 100);
        paid.status = ClaimStatus::Paid;

        let err = PendingClaim::new(paid, medical_aid(), patient()).unwrap_err();
        assert!(matches!(err, ClaimError::NotPending { status: ClaimStatus::Paid, .. }));
    }

    #[test]
    fn test_pending_claim_rejects_foreign_patient() {
        let mut other = patient();
        other.id = PatientId::new(12);

        let err = PendingClaim::new(claim(1, 100), medical_aid(), other).unwrap_err();
        assert!(matches!(err, ClaimError::AssociationMismatch { association: "patient", .. }));
    }

    #[test]
    fn test_pending_claim_rejects_foreign_medical_aid() {
        let mut other = medical_aid();
        other.id = MedicalAidId::new(4);

        let err = PendingClaim::new(claim(1, 100), other, patient()).unwrap_err();
        assert!(err.to_string().contains("medical aid"));
    }
}

// ============================================================================
// Table Tests
// ============================================================================

mod table_tests {
    use super::*;

    #[test]
    fn test_empty_collection_has_no_rows() {
        let table = ClaimsTable::from_claims(&[], &RowContext::default());

        assert!(table.is_empty());
        assert_eq!(table.text_rows().len(), 1);
        assert_eq!(table.text_rows()[0], HEADERS.to_vec());
    }

    #[test]
    fn test_one_row_per_claim() {
        let claims = vec![pending(1, 100), pending(2, 101), pending(3, 102)];
        let table = ClaimsTable::from_claims(&claims, &RowContext::default());

        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.text_rows().len(), 4);
    }

    #[test]
    fn test_derived_cells() {
        let table = ClaimsTable::from_claims(&[pending(1, 100)], &RowContext::default());
        let cells = table.rows()[0].cells();

        assert_eq!(
            cells,
            vec![
                "Discovery Health",
                "2024-05-14 09:30:00",
                "100",
                "Thandi Mokoena",
                "DH0099812",
                "01",
                "2024-05-14 09:30:00",
                "$1450.50",
                "pending",
                "",
            ]
        );
    }

    #[test]
    fn test_treatment_and_claim_date_share_created_at() {
        let table = ClaimsTable::from_claims(&[pending(1, 100)], &RowContext::default());
        let row = &table.rows()[0];

        assert_eq!(row.treatment_date, row.claim_date);
    }

    #[test]
    fn test_dates_follow_display_timezone() {
        let context = RowContext {
            timezone: "Africa/Johannesburg".parse::<Timezone>().unwrap(),
        };
        let table = ClaimsTable::from_claims(&[pending(1, 100)], &context);

        assert_eq!(table.rows()[0].treatment_date, "2024-05-14 11:30:00");
    }

    #[test]
    fn test_cells_are_trimmed() {
        let mut aid = medical_aid();
        aid.name = "  Bonitas  ".to_string();
        let claim = PendingClaim::new(claim(1, 100), aid, patient()).unwrap();
        let table = ClaimsTable::from_claims(&[claim], &RowContext::default());

        assert_eq!(table.rows()[0].cells()[0], "Bonitas");
    }
}

// ============================================================================
// Export Tests
// ============================================================================

mod export_tests {
    use super::*;

    #[test]
    fn test_legacy_delimiters_reproduced_exactly() {
        let out = serialize_rows(&text(&[&["A", "B"], &["1", "2"]]), ExportFormat::LegacyExcel).unwrap();
        assert_eq!(out, "A\t\t  B,\n1\t\t  2");
    }

    #[test]
    fn test_legacy_does_not_escape() {
        let out = serialize_rows(&text(&[&["A"], &["x,y"]]), ExportFormat::LegacyExcel).unwrap();
        assert_eq!(out, "A,\nx,y");
    }

    #[test]
    fn test_csv_plain_cells() {
        let out = serialize_rows(&text(&[&["A", "B"], &["1", "2"]]), ExportFormat::Csv).unwrap();
        assert_eq!(out, "A,B\r\n1,2\r\n");
    }

    #[test]
    fn test_csv_escapes_commas_quotes_and_newlines() {
        let out = serialize_rows(
            &text(&[&["Name", "Note"], &["Smith, J", "said \"hi\"\nthen left"]]),
            ExportFormat::Csv,
        )
        .unwrap();
        assert_eq!(
            out,
            "Name,Note\r\n\"Smith, J\",\"said \"\"hi\"\"\nthen left\"\r\n"
        );
    }

    #[test]
    fn test_json_records_keyed_by_header() {
        let out = serialize_rows(&text(&[&["A", "B"], &["1", "2"]]), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!([{ "A": "1", "B": "2" }]));
    }

    #[test]
    fn test_empty_table_still_exports_header() {
        let table = ClaimsTable::from_claims(&[], &RowContext::default());
        let out = serialize_table(&table, ExportFormat::Csv).unwrap();

        assert!(out.starts_with("Medical Aid Name,Treatment Date,Visit ID"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_table_csv_has_row_per_claim() {
        let table = ClaimsTable::from_claims(&[pending(1, 100), pending(2, 101)], &RowContext::default());
        let out = serialize_table(&table, ExportFormat::Csv).unwrap();

        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("Discovery Health,2024-05-14 09:30:00,101,Thandi Mokoena"));
    }

    #[test]
    fn test_legacy_download_link() {
        let link = DownloadLink::for_content("A\t\t  B", ExportFormat::LegacyExcel);

        assert_eq!(link.download, "filename");
        assert!(link.href.starts_with(&format!("data:{EXCEL_MIME_TYPE}")));
        assert!(link.href.ends_with(";charset=utf-8,A%09%09%20%20B"));
    }

    #[test]
    fn test_csv_download_link_has_extension_and_matching_mime() {
        let link = DownloadLink::for_content("A,B\r\n", ExportFormat::Csv);

        assert_eq!(link.download, "pending-claims.csv");
        assert_eq!(link.href, "data:text/csv;charset=utf-8,A%2CB%0D%0A");
    }

    #[test]
    fn test_every_format_declares_mime_and_name() {
        for format in ExportFormat::ALL {
            assert!(!format.mime_type().is_empty());
            assert!(!format.filename().is_empty());
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
    }
}

// ============================================================================
// Mock Port Tests
// ============================================================================

mod port_tests {
    use super::*;
    use domain_claims::ports::mock::MockClaimsPort;
    use domain_claims::ClaimsPort;

    fn claim_at(id: i64, hour: u32) -> PendingClaim {
        let mut c = claim(id, 100 + id);
        c.created_at = at(hour);
        PendingClaim::new(c, medical_aid(), patient()).unwrap()
    }

    #[tokio::test]
    async fn test_mock_orders_newest_first_and_paginates() {
        let port = MockClaimsPort::with_claims(vec![claim_at(1, 8), claim_at(2, 10), claim_at(3, 9)]);

        let page = port.pending_claims(PageRequest::new(1, 2), None).await.unwrap();
        let ids: Vec<i64> = page.items().iter().map(|c| c.claim().id.value()).collect();

        assert_eq!(ids, vec![2, 3]);
        assert_eq!(page.total(), 3);
        assert_eq!(page.last_page(), 2);

        let second = port.pending_claims(PageRequest::new(2, 2), None).await.unwrap();
        assert_eq!(second.items().len(), 1);
        assert_eq!(second.items()[0].claim().id.value(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_mock_fails() {
        let port = MockClaimsPort::unavailable("db down");

        let err = port.pending_claims(PageRequest::first(), None).await.unwrap_err();
        assert!(err.is_transient());
    }
}
