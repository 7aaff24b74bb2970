use tracing::{error, info};

use crate::models::{
    sort_newest_first, CommunityContent, ContentType, NewProgressEntry, NutritionTip, Program,
    ProgressEntry, ProgressMetadata, Workout, WorkoutType,
};
use crate::services::cosmic::{CosmicClient, CosmicError, ObjectQuery, LIST_PROPS};

const COMMUNITY_PROPS: &[&str] = &["id", "title", "slug", "content", "metadata", "created_at"];
const PROGRESS_PROPS: &[&str] = &["id", "title", "metadata", "created_at"];

/// Read and write access to the site's content.
///
/// Nothing here fails: a missing collection or record comes back empty, and
/// any other error is logged and treated the same way so pages can always
/// render their empty state.
#[derive(Clone)]
pub struct ContentService {
    cosmic: CosmicClient,
}

impl ContentService {
    pub fn new(cosmic: CosmicClient) -> Self {
        Self { cosmic }
    }

    pub async fn get_workouts(&self) -> Vec<Workout> {
        let query = ObjectQuery::new(ContentType::Workouts).props(LIST_PROPS).depth(1);
        degrade_list(self.cosmic.find(&query).await, "workouts")
    }

    pub async fn get_workouts_by_type(&self, workout_type: WorkoutType) -> Vec<Workout> {
        let query = ObjectQuery::new(ContentType::Workouts)
            .metadata("workout_type", workout_type.as_str())
            .props(LIST_PROPS)
            .depth(1);
        degrade_list(self.cosmic.find(&query).await, "workouts by type")
    }

    pub async fn get_workout_by_slug(&self, slug: &str) -> Option<Workout> {
        let query = ObjectQuery::new(ContentType::Workouts).slug(slug).depth(1);
        degrade_one(self.cosmic.find_one(&query).await, "workout")
    }

    pub async fn get_programs(&self) -> Vec<Program> {
        let query = ObjectQuery::new(ContentType::Programs).props(LIST_PROPS).depth(1);
        degrade_list(self.cosmic.find(&query).await, "programs")
    }

    pub async fn get_program_by_slug(&self, slug: &str) -> Option<Program> {
        let query = ObjectQuery::new(ContentType::Programs).slug(slug).depth(1);
        degrade_one(self.cosmic.find_one(&query).await, "program")
    }

    pub async fn get_nutrition_tips(&self) -> Vec<NutritionTip> {
        let query = ObjectQuery::new(ContentType::NutritionTips).props(LIST_PROPS).depth(1);
        degrade_list(self.cosmic.find(&query).await, "nutrition tips")
    }

    /// Community posts, newest first.
    pub async fn get_community_content(&self) -> Vec<CommunityContent> {
        let query = ObjectQuery::new(ContentType::Community).props(COMMUNITY_PROPS).depth(1);
        let mut content: Vec<CommunityContent> =
            degrade_list(self.cosmic.find(&query).await, "community content");
        content.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        content
    }

    /// Progress entries, newest entry date first.
    pub async fn get_progress_entries(&self) -> Vec<ProgressEntry> {
        let query = ObjectQuery::new(ContentType::Progress).props(PROGRESS_PROPS).depth(1);
        let mut entries: Vec<ProgressEntry> = degrade_list(self.cosmic.find(&query).await, "progress entries");
        sort_newest_first(&mut entries);
        entries
    }

    pub async fn create_progress_entry(&self, entry: NewProgressEntry) -> Option<ProgressEntry> {
        let object = entry.into_new_object();

        match self.cosmic.insert_one::<ProgressMetadata, _>(&object).await {
            Ok(created) => {
                info!("Created progress entry {} for {}", created.id, created.metadata.date);
                Some(created)
            }
            Err(e) => {
                error!("Error creating progress entry: {}", e);
                None
            }
        }
    }
}

fn degrade_list<T>(result: Result<Vec<T>, CosmicError>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            Vec::new()
        }
    }
}

fn degrade_one<T>(result: Result<T, CosmicError>, what: &str) -> Option<T> {
    match result {
        Ok(item) => Some(item),
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_degrades_silently() {
        let list: Vec<u8> = degrade_list(Err(CosmicError::NotFound("none".into())), "things");
        assert!(list.is_empty());

        let one: Option<u8> = degrade_one(Err(CosmicError::ServerError("down".into())), "thing");
        assert!(one.is_none());

        assert_eq!(degrade_one(Ok(7u8), "thing"), Some(7));
    }
}
