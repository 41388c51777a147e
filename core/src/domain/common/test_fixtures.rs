//! Hand-rolled stub ports for exercising `Service` pipelines in unit tests.
//! Stubs share state through `Arc` so a test can keep handles after moving
//! clones into the service.

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use bytes::Bytes;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    health_plan::{
        entities::{FridgeScan, HealthPlan, OcrResult},
        ports::{HealthPlanRepository, LlmClient, OcrClient},
        value_objects::OcrExtraction,
    },
    nutrition::{entities::UserProfile, ports::UserProfileRepository},
    nutrition_log::{entities::DailyNutritionTotal, ports::DailyTotalRepository},
    recipes::{
        entities::{RecipeCandidate, SavedRecipe},
        ports::{RecipeSearchClient, SavedRecipeRepository},
        value_objects::RecipeSummary,
    },
    storage::{
        entities::{ImageKind, StoredImage},
        ports::{ObjectStoragePort, StoredImageRepository},
    },
};

#[derive(Clone, Default)]
pub struct StubUserProfiles {
    profile: Arc<Mutex<Option<UserProfile>>>,
}

impl StubUserProfiles {
    pub fn seed(&self, profile: UserProfile) -> &Self {
        *self.profile.lock().unwrap() = Some(profile);
        self
    }
}

impl UserProfileRepository for StubUserProfiles {
    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        *self.profile.lock().unwrap() = Some(profile.clone());
        Ok(profile)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(self
            .profile
            .lock()
            .unwrap()
            .clone()
            .filter(|p| p.id == user_id))
    }
}

#[derive(Clone, Default)]
pub struct StubHealthPlans {
    ocr: Arc<Mutex<Option<OcrResult>>>,
    fridge: Arc<Mutex<Option<FridgeScan>>>,
    plan: Arc<Mutex<Option<HealthPlan>>>,
}

impl StubHealthPlans {
    pub fn seed_ocr(&self, result: OcrResult) -> &Self {
        *self.ocr.lock().unwrap() = Some(result);
        self
    }

    pub fn seed_fridge(&self, scan: FridgeScan) -> &Self {
        *self.fridge.lock().unwrap() = Some(scan);
        self
    }

    pub fn seed_plan(&self, plan: HealthPlan) -> &Self {
        *self.plan.lock().unwrap() = Some(plan);
        self
    }

    pub fn stored_plan(&self, user_id: Uuid) -> Option<HealthPlan> {
        self.plan
            .lock()
            .unwrap()
            .clone()
            .filter(|p| p.user_id == user_id)
    }
}

impl HealthPlanRepository for StubHealthPlans {
    async fn get_ocr_result(&self, user_id: Uuid) -> Result<Option<OcrResult>, CoreError> {
        Ok(self
            .ocr
            .lock()
            .unwrap()
            .clone()
            .filter(|r| r.user_id == user_id))
    }

    async fn upsert_ocr_result(&self, result: OcrResult) -> Result<OcrResult, CoreError> {
        *self.ocr.lock().unwrap() = Some(result.clone());
        Ok(result)
    }

    async fn get_fridge_scan(&self, user_id: Uuid) -> Result<Option<FridgeScan>, CoreError> {
        Ok(self
            .fridge
            .lock()
            .unwrap()
            .clone()
            .filter(|s| s.user_id == user_id))
    }

    async fn upsert_fridge_scan(&self, scan: FridgeScan) -> Result<FridgeScan, CoreError> {
        *self.fridge.lock().unwrap() = Some(scan.clone());
        Ok(scan)
    }

    async fn get_health_plan(&self, user_id: Uuid) -> Result<Option<HealthPlan>, CoreError> {
        Ok(self.stored_plan(user_id))
    }

    async fn upsert_health_plan(&self, plan: HealthPlan) -> Result<HealthPlan, CoreError> {
        *self.plan.lock().unwrap() = Some(plan.clone());
        Ok(plan)
    }
}

#[derive(Clone, Default)]
pub struct StubOcrClient {
    calls: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl StubOcrClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_calls(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl OcrClient for StubOcrClient {
    async fn extract_report(&self, _user_id: Uuid) -> Result<OcrExtraction, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::ExternalServiceError("ocr unavailable".into()));
        }

        Ok(OcrExtraction {
            full_text: "cholesterol 250 mg/dL".to_string(),
            file_path: "reports/r1.jpg".to_string(),
        })
    }
}

#[derive(Clone, Default)]
pub struct StubLlm {
    image_calls: Arc<AtomicUsize>,
    text_calls: Arc<AtomicUsize>,
    fail_image: Arc<AtomicBool>,
}

impl StubLlm {
    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn fail_image_calls(&self) {
        self.fail_image.store(true, Ordering::SeqCst);
    }
}

impl LlmClient for StubLlm {
    async fn generate_with_image(
        &self,
        _prompt: String,
        _image_data: Vec<u8>,
        _mime_type: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_image.load(Ordering::SeqCst) {
            return Err(CoreError::ExternalServiceError("vision unavailable".into()));
        }

        Ok(r#"{"Ingredients": ["spinach", "bacon"]}"#.to_string())
    }

    async fn generate_with_text(
        &self,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);

        Ok(r#"{
            "include": ["spinach"],
            "exclude": ["bacon"],
            "healthInsights": [],
            "nutritionTips": "",
            "smartShopping": ""
        }"#
        .to_string())
    }
}

#[derive(Clone, Default)]
pub struct StubRecipeClient {
    search_results: Arc<Mutex<Vec<RecipeSummary>>>,
    bulk_results: Arc<Mutex<Vec<RecipeCandidate>>>,
    search_calls: Arc<AtomicUsize>,
    bulk_calls: Arc<AtomicUsize>,
}

impl StubRecipeClient {
    pub fn seed_search(&self, summaries: Vec<RecipeSummary>) -> &Self {
        *self.search_results.lock().unwrap() = summaries;
        self
    }

    pub fn seed_bulk(&self, candidates: Vec<RecipeCandidate>) -> &Self {
        *self.bulk_results.lock().unwrap() = candidates;
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn bulk_calls(&self) -> usize {
        self.bulk_calls.load(Ordering::SeqCst)
    }
}

impl RecipeSearchClient for StubRecipeClient {
    async fn search_by_ingredients(
        &self,
        _include: Vec<String>,
        _number: u32,
    ) -> Result<Vec<RecipeSummary>, CoreError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn get_information_bulk(
        &self,
        _ids: Vec<i64>,
    ) -> Result<Vec<RecipeCandidate>, CoreError> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bulk_results.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub struct StubSavedRecipes {
    records: Arc<Mutex<Vec<SavedRecipe>>>,
}

impl StubSavedRecipes {
    pub fn seed(&self, records: Vec<SavedRecipe>) -> &Self {
        *self.records.lock().unwrap() = records;
        self
    }
}

impl SavedRecipeRepository for StubSavedRecipes {
    async fn append(&self, recipe: SavedRecipe) -> Result<SavedRecipe, CoreError> {
        self.records.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn list_by_date(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.date_key == date_key)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct StubDailyTotals {
    stored: Arc<Mutex<HashMap<(Uuid, NaiveDate), DailyNutritionTotal>>>,
    upserts: Arc<AtomicUsize>,
}

impl StubDailyTotals {
    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

impl DailyTotalRepository for StubDailyTotals {
    async fn upsert(
        &self,
        total: DailyNutritionTotal,
    ) -> Result<DailyNutritionTotal, CoreError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.stored
            .lock()
            .unwrap()
            .insert((total.user_id, total.date_key), total.clone());
        Ok(total)
    }

    async fn get(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<Option<DailyNutritionTotal>, CoreError> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .get(&(user_id, date_key))
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct StubHealthCheck;

impl HealthCheckRepository for StubHealthCheck {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            reachable: true,
            latency_ms: 1,
        })
    }
}

#[derive(Clone, Default)]
pub struct StubObjectStorage;

impl ObjectStoragePort for StubObjectStorage {
    fn bucket_name(&self, kind: ImageKind) -> String {
        format!("demeter-{}", kind.as_str())
    }

    async fn put_object(
        &self,
        _bucket: &str,
        _object_key: &str,
        _payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        Ok(())
    }

    async fn get_object(&self, _bucket: &str, _object_key: &str) -> Result<Bytes, CoreError> {
        Ok(Bytes::from_static(b"jpeg-bytes"))
    }

    async fn delete_object(&self, _bucket: &str, _object_key: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct StubStoredImages {
    images: Arc<Mutex<Vec<StoredImage>>>,
    empty: Arc<AtomicBool>,
}

impl StubStoredImages {
    /// Make lookups report no uploaded images.
    pub fn set_empty(&self) {
        self.empty.store(true, Ordering::SeqCst);
    }
}

impl StoredImageRepository for StubStoredImages {
    async fn create(&self, image: StoredImage) -> Result<StoredImage, CoreError> {
        self.images.lock().unwrap().push(image.clone());
        Ok(image)
    }

    async fn latest_by_user_and_kind(
        &self,
        user_id: Uuid,
        kind: ImageKind,
    ) -> Result<Option<StoredImage>, CoreError> {
        if self.empty.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let stored = self
            .images
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|i| i.user_id == user_id && i.kind == kind)
            .cloned();

        // Tests that never upload still get a usable fridge image.
        Ok(stored.or_else(|| {
            Some(StoredImage::new(
                user_id,
                kind,
                format!("{user_id}/{}-seeded.jpg", kind.as_str()),
                "image/jpeg".to_string(),
                9,
            ))
        }))
    }
}

pub type FixtureService = Service<
    StubUserProfiles,
    StubHealthPlans,
    StubOcrClient,
    StubLlm,
    StubRecipeClient,
    StubSavedRecipes,
    StubDailyTotals,
    StubHealthCheck,
    StubObjectStorage,
    StubStoredImages,
>;

pub fn fixture_service() -> FixtureService {
    Service::new(
        StubUserProfiles::default(),
        StubHealthPlans::default(),
        StubOcrClient::default(),
        StubLlm::default(),
        StubRecipeClient::default(),
        StubSavedRecipes::default(),
        StubDailyTotals::default(),
        StubHealthCheck,
        StubObjectStorage,
        StubStoredImages::default(),
    )
}
