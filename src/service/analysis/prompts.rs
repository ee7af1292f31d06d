//! Prompt templates for claim integrity analysis
//!
//! Both builders are pure: equal claim records render byte-identical
//! strings. The conditional accounting guidance lives inside the fixed
//! instruction text, not in code, so the instruction shape never varies.

use crate::model::ClaimRecord;

/// Render the fixed system instruction with the claim value embedded
pub fn build_system_instruction(claim: &ClaimRecord) -> String {
    format!(
        r#"Anda adalah Agen Analisis Integritas Klaim Finansial untuk rumah sakit BLUD di Indonesia.
Tugas Anda adalah menganalisis klaim BPJS dan menghasilkan output akuntansi yang ketat sesuai Standar Akuntansi Pemerintahan (SAP) Berbasis Akrual.

ATURAN LOGIKA KETAT:

1. ANALISIS KEPATUHAN (complianceAnalysis):
   - Jika Status = Pending/Gagal: Berikan peringatan risiko Piutang Tidak Tertagih.
   - Tentukan aksi korektif spesifik berdasarkan 'Alasan'.
   - Batas waktu: Sebutkan 10 hari atau batas kadaluarsa 6 bulan.

2. SIMULASI AKUNTANSI (accountingSimulation):
   - Nilai Klaim: {claim_value}
   - Jika Status = LAYAK BAYAR (Approved):
     Jurnal Penerimaan Kas (karena asumsi piutang sudah diakui sebelumnya atau bersamaan):
     Debit: Kas di Kas BLUD
     Kredit: Piutang BLUD
   - Jika Status = PENDING atau GAGAL BAYAR:
     Jurnal Pengakuan Hak (Akrual) - karena layanan sudah diberikan walau uang belum masuk:
     Debit: Piutang Klaim BPJS
     Kredit: Pendapatan-LO
     (Penjelasan: Jurnal ini mengakui Pendapatan-LO dan Piutang sesuai Basis Akrual untuk Laporan Operasional.)

3. SARAN MANAJERIAL (advisory):
   - Jika alasan terkait Koding atau Dokumen: Sarankan pelatihan staf.
   - Selalu sertakan peringatan keamanan PHI/RBAC.

Output harus berupa JSON sesuai schema yang diminta. Gunakan Bahasa Indonesia yang formal dan profesional akuntansi."#,
        claim_value = claim.claim_value
    )
}

/// Render the short data summary listing the four claim fields
pub fn build_claim_prompt(claim: &ClaimRecord) -> String {
    format!(
        "Data Klaim:\nNo RM: {record_number}\nNilai: {claim_value}\nStatus: {status}\nAlasan: {reason}",
        record_number = claim.record_number,
        claim_value = claim.claim_value,
        status = claim.status,
        reason = claim.reason,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimReason, ClaimStatus};

    fn claim(status: ClaimStatus, reason: ClaimReason) -> ClaimRecord {
        ClaimRecord {
            record_number: "12-34-56".to_string(),
            claim_value: 5_000_000.0,
            status,
            reason,
        }
    }

    #[test]
    fn test_builders_are_deterministic() {
        let a = claim(ClaimStatus::Pending, ClaimReason::IncompleteDocs);
        let b = claim(ClaimStatus::Pending, ClaimReason::IncompleteDocs);

        assert_eq!(build_system_instruction(&a), build_system_instruction(&b));
        assert_eq!(build_claim_prompt(&a), build_claim_prompt(&b));
    }

    #[test]
    fn test_approved_guidance_references_cash_receipt_entry() {
        let instruction =
            build_system_instruction(&claim(ClaimStatus::Approved, ClaimReason::None));

        assert!(instruction.contains("Jurnal Penerimaan Kas"));
        assert!(instruction.contains("Debit: Kas di Kas BLUD"));
        assert!(instruction.contains("Kredit: Piutang BLUD"));
    }

    #[test]
    fn test_unsettled_guidance_references_revenue_recognition_entry() {
        for status in [ClaimStatus::Pending, ClaimStatus::Denied] {
            let instruction =
                build_system_instruction(&claim(status, ClaimReason::TechnicalError));

            assert!(instruction.contains("Jurnal Pengakuan Hak (Akrual)"));
            assert!(instruction.contains("Debit: Piutang Klaim BPJS"));
            assert!(instruction.contains("Kredit: Pendapatan-LO"));
        }
    }

    #[test]
    fn test_claim_value_embedded_as_plain_numeric_literal() {
        let record = claim(ClaimStatus::Denied, ClaimReason::CodingError);

        assert!(build_system_instruction(&record).contains("Nilai Klaim: 5000000"));
        assert!(build_claim_prompt(&record).contains("Nilai: 5000000"));
    }

    #[test]
    fn test_claim_prompt_lists_all_four_fields() {
        let prompt = build_claim_prompt(&claim(ClaimStatus::Denied, ClaimReason::CodingError));

        assert!(prompt.contains("No RM: 12-34-56"));
        assert!(prompt.contains("Nilai: 5000000"));
        assert!(prompt.contains("Status: Gagal Bayar (Denied/Ditolak)"));
        assert!(prompt.contains("Alasan: Ketidaksesuaian/Kesalahan Koding"));
    }
}
