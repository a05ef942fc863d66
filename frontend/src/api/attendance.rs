use super::{
    client::ApiClient,
    types::{ApiError, Attendance, AttendancePayload, ListPage, MutationResponse},
};

impl ApiClient {
    /// One server-side page of attendance records.
    pub async fn list_attendances(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<ListPage<Attendance>, ApiError> {
        self.get_page("/attendance", "attendances", page, limit)
            .await
    }

    pub async fn get_attendance(&self, id: i64) -> Result<Attendance, ApiError> {
        self.get_item(&format!("/attendance/{}", id), "attendance")
            .await
    }

    pub async fn create_attendance(
        &self,
        payload: &AttendancePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/attendance", payload).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &AttendancePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/attendance/{}", id), payload).await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/attendance/{}", id)).await
    }
}
