use crate::api::{
    ApiClient, ApiError, Attendance, AttendancePayload, ListPage, Meeting, MutationResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_page(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<ListPage<Attendance>, ApiError> {
        self.client.list_attendances(page, limit).await
    }

    /// Meetings a record can be attached to.
    pub async fn fetch_events(&self) -> Result<Vec<Meeting>, ApiError> {
        self.client.list_meetings().await
    }

    pub async fn save_attendance(
        &self,
        id: Option<i64>,
        payload: AttendancePayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_attendance(id, &payload).await,
            None => self.client.create_attendance(&payload).await,
        }
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_attendance(id).await
    }
}
