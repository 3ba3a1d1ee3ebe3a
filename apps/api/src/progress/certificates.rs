//! Certificate issuance: id, verification code and display URL for a completed module.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

use crate::errors::AppError;
use crate::progress::models::Certificate;
use crate::progress::store::ProgressStore;
use crate::random::{lock_rng, SharedRng};

const VERIFICATION_CODE_LEN: usize = 8;
const VERIFICATION_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct CertificateIssuer {
    base_url: String,
    /// Last millisecond stamp handed out; ids never repeat within a process.
    last_stamp: AtomicU64,
}

impl CertificateIssuer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            last_stamp: AtomicU64::new(0),
        }
    }

    /// Issues a certificate and appends it to the owner's record.
    ///
    /// The certificate is built under the store's write lock, after the user
    /// check, so append order matches id order. Issuing twice for the same
    /// module yields two distinct certificates.
    pub async fn issue(
        &self,
        store: &dyn ProgressStore,
        rng: &SharedRng,
        user_id: &str,
        specialization_id: &str,
        module_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<Certificate, AppError> {
        let certificate = store
            .append_certificate(
                user_id,
                specialization_id,
                Box::new(|| -> Result<Certificate, AppError> {
                    let mut rng = lock_rng(rng)?;
                    Ok(self.build(&mut *rng, user_id, specialization_id, module_id, issued_at))
                }),
            )
            .await?;
        info!(
            user_id,
            specialization_id,
            module_id,
            certificate_id = %certificate.id,
            "Certificate issued"
        );

        Ok(certificate)
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: &str,
        specialization_id: &str,
        module_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Certificate {
        Certificate {
            id: format!("cert_{}", self.next_stamp(issued_at)),
            user_id: user_id.to_string(),
            specialization_id: specialization_id.to_string(),
            module_id: module_id.to_string(),
            issued_at,
            certificate_url: format!("{}/{}/{}", self.base_url, user_id, module_id),
            verification_code: verification_code(rng),
        }
    }

    /// Issuance time in Unix millis, bumped past the previous stamp when the
    /// clock has not moved (or moved backwards).
    fn next_stamp(&self, issued_at: DateTime<Utc>) -> u64 {
        let now = u64::try_from(issued_at.timestamp_millis()).unwrap_or(0);
        let previous = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

pub fn verification_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..VERIFICATION_CODE_LEN)
        .map(|_| VERIFICATION_ALPHABET[rng.gen_range(0..VERIFICATION_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::models::UserProfile;
    use crate::progress::store::InMemoryProgressStore;
    use crate::random::shared_rng;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Arc;

    const BASE: &str = "https://panthiya.com/certificates";

    #[test]
    fn test_verification_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let code = verification_code(&mut rng);
            assert_eq!(code.len(), 8);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let issuer = CertificateIssuer::new(BASE);
        let mut rng = StdRng::seed_from_u64(1);
        let at = Utc::now();

        let first = issuer.build(&mut rng, "u1", "it", "it-basics", at);
        let second = issuer.build(&mut rng, "u1", "it", "it-basics", at);

        let stamp = |id: &str| id.trim_start_matches("cert_").parse::<u64>().unwrap();
        assert_eq!(stamp(&first.id), at.timestamp_millis() as u64);
        assert_eq!(stamp(&second.id), stamp(&first.id) + 1);
    }

    #[test]
    fn test_clock_going_backwards_still_yields_new_id() {
        let issuer = CertificateIssuer::new(BASE);
        let mut rng = StdRng::seed_from_u64(1);
        let now = Utc::now();

        let first = issuer.build(&mut rng, "u1", "it", "it-basics", now);
        let earlier = issuer.build(
            &mut rng,
            "u1",
            "it",
            "it-basics",
            now - chrono::Duration::seconds(10),
        );
        assert_ne!(first.id, earlier.id);
    }

    #[test]
    fn test_url_is_base_user_module() {
        let issuer = CertificateIssuer::new(BASE);
        let mut rng = StdRng::seed_from_u64(3);
        let cert = issuer.build(&mut rng, "u1", "it", "it-basics", Utc::now());
        assert_eq!(
            cert.certificate_url,
            "https://panthiya.com/certificates/u1/it-basics"
        );
    }

    #[tokio::test]
    async fn test_issue_twice_gives_two_distinct_certificates() {
        let store = InMemoryProgressStore::new();
        store
            .upsert_user("u1", UserProfile::default(), Utc::now())
            .await
            .unwrap();
        let issuer = CertificateIssuer::new(BASE);
        let rng = shared_rng(Some(9));
        let at = Utc::now();

        let a = issuer
            .issue(&store, &rng, "u1", "it", "it-basics", at)
            .await
            .unwrap();
        let b = issuer
            .issue(&store, &rng, "u1", "it", "it-basics", at)
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.verification_code, b.verification_code);
        assert_eq!(a.user_id, "u1");
        assert_eq!(a.specialization_id, "it");
        assert_eq!(a.module_id, "it-basics");

        let record = store.get_progress("u1", "it").await.unwrap();
        assert_eq!(record.certificates, vec![a, b]);
    }

    #[tokio::test]
    async fn test_issue_for_unknown_user_is_not_found() {
        let store = InMemoryProgressStore::new();
        let issuer = CertificateIssuer::new(BASE);
        let rng = shared_rng(Some(9));

        let result = issuer
            .issue(&store, &rng, "ghost", "it", "it-basics", Utc::now())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_user_consumes_no_stamp() {
        let store = InMemoryProgressStore::new();
        let issuer = CertificateIssuer::new(BASE);
        let rng = shared_rng(Some(9));
        let at = Utc::now();

        let _ = issuer
            .issue(&store, &rng, "ghost", "it", "it-basics", at)
            .await;
        let mut local = StdRng::seed_from_u64(1);
        let cert = issuer.build(&mut local, "u1", "it", "it-basics", at);
        assert_eq!(cert.id, format!("cert_{}", at.timestamp_millis()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issues_append_in_id_order() {
        let store = Arc::new(InMemoryProgressStore::new());
        store
            .upsert_user("u1", UserProfile::default(), Utc::now())
            .await
            .unwrap();
        let issuer = Arc::new(CertificateIssuer::new(BASE));
        let rng = shared_rng(Some(9));
        let at = Utc::now();

        let mut handles = Vec::new();
        for _ in 0..64 {
            let store = Arc::clone(&store);
            let issuer = Arc::clone(&issuer);
            let rng = Arc::clone(&rng);
            handles.push(tokio::spawn(async move {
                issuer
                    .issue(store.as_ref(), &rng, "u1", "it", "it-basics", at)
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stamps: Vec<u64> = store
            .get_progress("u1", "it")
            .await
            .unwrap()
            .certificates
            .iter()
            .map(|c| c.id.trim_start_matches("cert_").parse().unwrap())
            .collect();
        assert_eq!(stamps.len(), 64);
        assert!(stamps.windows(2).all(|w| w[0] < w[1]), "{stamps:?}");
    }
}
