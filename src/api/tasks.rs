//! Task Operations
//!
//! List, create, update and delete against `/tasks`.

use super::TaskClient;
use crate::error::ApiError;
use crate::models::{FilterMode, NewTask, Task, TaskId};

impl TaskClient {
    /// GET /tasks, narrowed server-side by the filter's `completed` parameter
    pub async fn list_tasks(&self, filter: FilterMode) -> Result<Vec<Task>, ApiError> {
        let mut request = self.http.get(self.config.tasks_url());
        if let Some(completed) = filter.completed_param() {
            request = request.query(&[("completed", completed)]);
        }
        tracing::debug!(target: "api", %filter, "GET /tasks");
        let response = self.send(request).await?;
        Ok(response.json::<Vec<Task>>().await?)
    }

    /// POST /tasks; the returned task carries the server-assigned id
    pub async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let request = self.http.post(self.config.tasks_url()).json(&NewTask::new(title));
        tracing::debug!(target: "api", title, "POST /tasks");
        let response = self.send(request).await?;
        Ok(response.json::<Task>().await?)
    }

    /// PATCH /tasks/{id} with the full task
    pub async fn update_task(&self, task: &Task) -> Result<Task, ApiError> {
        let request = self.http.patch(self.config.task_url(task.id)).json(task);
        tracing::debug!(target: "api", id = task.id, "PATCH /tasks/{{id}}");
        let response = self.send(request).await?;
        Ok(response.json::<Task>().await?)
    }

    /// DELETE /tasks/{id}; the response body is ignored
    pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let request = self.http.delete(self.config.task_url(id));
        tracing::debug!(target: "api", id, "DELETE /tasks/{{id}}");
        self.send(request).await?;
        Ok(())
    }
}
