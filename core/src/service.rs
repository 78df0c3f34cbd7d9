//! Directory operations composed from employee-server calls.
//!
//! # Design
//! Every operation is stateless and issues at most two sequential upstream
//! calls. Aggregation (name filter, max salary, top earners) happens in
//! memory over a fresh `list_all` result; nothing is cached between calls.
//!
//! `delete` resolves the employee's name before deleting because the
//! employee server keys deletion on name. A concurrent external delete
//! between the two calls is not guarded against.

use tracing::{debug, info};

use crate::client::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::text::contains_ignore_case;
use crate::transport::{Transport, UreqTransport};
use crate::types::{DeleteEmployeeInput, Employee, EmployeeCreationInput};

/// Collection endpoint of the employee server.
pub const EMPLOYEE_PATH: &str = "/api/v1/employee";

/// Number of names `top_ten_earners` returns.
pub const DEFAULT_TOP_EARNERS: usize = 10;

/// Employee directory backed by the remote employee server.
#[derive(Clone)]
pub struct DirectoryService<T = UreqTransport> {
    client: DirectoryClient<T>,
}

impl DirectoryService<UreqTransport> {
    /// Build a service talking to `config.base_url` over a fresh `ureq` agent.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(DirectoryClient::new(&config.base_url, UreqTransport::new()))
    }
}

impl<T: Transport> DirectoryService<T> {
    pub fn new(client: DirectoryClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DirectoryClient<T> {
        &self.client
    }

    /// All employees, in the order the employee server lists them.
    pub fn list_all(&self) -> DirectoryResult<Vec<Employee>> {
        let employees: Vec<Employee> = self.client.get(EMPLOYEE_PATH)?;
        debug!(count = employees.len(), "fetched employee list");
        Ok(employees)
    }

    /// Employees whose name contains `fragment`, ignoring case.
    pub fn search_by_name(&self, fragment: &str) -> DirectoryResult<Vec<Employee>> {
        let matches: Vec<Employee> = self
            .list_all()?
            .into_iter()
            .filter(|employee| contains_ignore_case(&employee.name, fragment))
            .collect();
        info!(fragment, count = matches.len(), "searched employees by name");
        Ok(matches)
    }

    /// Highest salary in the directory, or 0 when it is empty.
    pub fn highest_salary(&self) -> DirectoryResult<u32> {
        let highest = self
            .list_all()?
            .iter()
            .map(|employee| employee.salary)
            .max()
            .unwrap_or(0);
        debug!(highest, "computed highest salary");
        Ok(highest)
    }

    pub fn get_by_id(&self, id: &str) -> DirectoryResult<Employee> {
        let employee: Employee = self.client.get(&employee_path(id))?;
        debug!(id, name = %employee.name, "fetched employee");
        Ok(employee)
    }

    /// Names of the `limit` best-paid employees, highest salary first.
    /// Equal salaries keep the employee server's order.
    pub fn top_earners(&self, limit: usize) -> DirectoryResult<Vec<String>> {
        let mut employees = self.list_all()?;
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        let names: Vec<String> = employees
            .into_iter()
            .take(limit)
            .map(|employee| employee.name)
            .collect();
        debug!(limit, count = names.len(), "selected top earners");
        Ok(names)
    }

    pub fn top_ten_earners(&self) -> DirectoryResult<Vec<String>> {
        self.top_earners(DEFAULT_TOP_EARNERS)
    }

    /// Create an employee; the returned record carries the server-assigned id.
    pub fn create(&self, input: &EmployeeCreationInput) -> DirectoryResult<Employee> {
        let employee: Employee = self.client.post(EMPLOYEE_PATH, input)?;
        info!(id = %employee.id, "created employee");
        Ok(employee)
    }

    /// Delete the employee with `id` and return the name it had.
    pub fn delete(&self, id: &str) -> DirectoryResult<String> {
        let not_found = || DirectoryError::NotFound { id: id.to_string() };

        // `data` must be present; only an explicit null means "no such record".
        let data = match self.client.get::<serde_json::Value>(&employee_path(id)) {
            Ok(data) if !data.is_null() => data,
            Ok(_) | Err(DirectoryError::Upstream { status: 404, .. }) => {
                debug!(id, "employee to delete does not exist");
                return Err(not_found());
            }
            Err(err) => return Err(err),
        };
        let employee: Employee =
            serde_json::from_value(data).map_err(|e| DirectoryError::Decode(e.to_string()))?;

        let input = DeleteEmployeeInput {
            name: employee.name,
        };
        if !self.client.delete(EMPLOYEE_PATH, &input)? {
            return Err(not_found());
        }

        info!(id, name = %input.name, "deleted employee");
        Ok(input.name)
    }
}

fn employee_path(id: &str) -> String {
    format!("{EMPLOYEE_PATH}/{id}")
}
