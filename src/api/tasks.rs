use super::client::{ApiError, Client};
use crate::types::{PagedResult, Task, TaskFunc, TaskLog, TaskLogFilter};

impl Client {
    pub fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_data("/tasks/")
    }

    /// Callables the scheduler accepts in task definitions.
    pub fn task_funcs(&self) -> Result<Vec<TaskFunc>, ApiError> {
        self.get_data("/tasks/funcs")
    }

    pub fn add_task(&self, task: &Task) -> Result<String, ApiError> {
        self.post_ack("/tasks/", task)
    }

    pub fn update_task(&self, task: &Task) -> Result<String, ApiError> {
        self.put_ack("/tasks/", task)
    }

    pub fn delete_task(&self, id: u64) -> Result<String, ApiError> {
        self.delete_ack(&format!("/tasks/{id}"))
    }

    /// Fire a task immediately, outside its cron schedule.
    pub fn run_task(&self, id: u64) -> Result<String, ApiError> {
        self.get_ack(&format!("/tasks/run/{id}"))
    }

    pub fn search_task_logs(
        &self,
        filter: &TaskLogFilter,
    ) -> Result<PagedResult<TaskLog>, ApiError> {
        self.post_data("/tasks/log/search", filter)
    }
}
