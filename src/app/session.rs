// ==========================================
// 酒店连锁运营管理 - 菜单会话
// ==========================================
// 职责:
// - 打印编号菜单，读取选项并分派到仓储 / 报表操作
// - 逐字段提示输入，校验失败重新提示
// - 单次操作的存储错误只报告，不中断会话
// 输入输出流由调用方注入，会话本身不持有全局状态
// ==========================================

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::app::input::{self, InputError};
use crate::app::state::AppState;
use crate::domain::booking::NewBooking;
use crate::domain::customer::{Customer, NAME_MAX_LEN};
use crate::domain::maintenance::{
    MaintenanceCompany, Repair, COMPANY_NAME_MAX_LEN, REPAIR_TYPE_MAX_LEN,
};
use crate::domain::room::{Room, ROOM_TYPE_MAX_LEN};
use crate::domain::staff::{AssignOutcome, NewRequest};
use crate::i18n::{t, t_with_args};
use crate::repository::RepositoryError;

/// 退出选项
pub const EXIT_CHOICE: u32 = 17;

/// 菜单项数量
pub const MENU_ITEM_COUNT: u32 = 18;

/// 会话级错误（结束会话）
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("输入已结束")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// 单次操作的错误
enum OpError {
    Repository(RepositoryError),
    Session(SessionError),
}

impl From<RepositoryError> for OpError {
    fn from(err: RepositoryError) -> Self {
        OpError::Repository(err)
    }
}

impl From<SessionError> for OpError {
    fn from(err: SessionError) -> Self {
        OpError::Session(err)
    }
}

impl From<io::Error> for OpError {
    fn from(err: io::Error) -> Self {
        OpError::Session(SessionError::Io(err))
    }
}

type OpResult = Result<(), OpError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// ==========================================
// Session - 菜单会话
// ==========================================
pub struct Session<'a, R, W> {
    state: &'a AppState,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, out: W) -> Self {
        Self { state, input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// 运行会话，直到选择退出或输入结束
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.print_menu()?;
            let choice = match self.prompt("menu.choice", input::parse_choice) {
                Ok(choice) => choice,
                Err(SessionError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(SessionError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// 执行一个菜单项
    pub fn dispatch(&mut self, choice: u32) -> Result<Flow, SessionError> {
        tracing::debug!(choice, "菜单选择");
        let result = match choice {
            1 => self.add_customer(),
            2 => self.add_room(),
            3 => self.add_maintenance_company(),
            4 => self.add_repair(),
            5 => self.book_room(),
            6 => self.assign_house_cleaning(),
            7 => self.raise_repair_request(),
            8 => self.available_rooms(),
            9 => self.booked_rooms(),
            10 => self.bookings_for_week(),
            11 => self.top_k_prices_in_range(),
            12 => self.top_k_prices_for_customer(),
            13 => self.total_cost_for_customer(),
            14 => self.repairs_by_company(),
            15 => self.top_k_companies(),
            16 => self.repairs_per_year(),
            EXIT_CHOICE => return Ok(Flow::Exit),
            18 => self.create_assignment(),
            _ => {
                writeln!(self.out, "{}", t("menu.unrecognized"))?;
                return Ok(Flow::Continue);
            }
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(OpError::Repository(e)) => {
                tracing::error!("操作失败: {}", e);
                let reason = e.to_string();
                writeln!(
                    self.out,
                    "{}",
                    t_with_args("error.operation_failed", &[("reason", &reason)])
                )?;
                Ok(Flow::Continue)
            }
            Err(OpError::Session(e)) => Err(e),
        }
    }

    fn print_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.out, "{}", t("menu.title"))?;
        writeln!(self.out, "---------")?;
        for item in 1..=MENU_ITEM_COUNT {
            writeln!(self.out, "{}. {}", item, t(&format!("menu.item_{}", item)))?;
        }
        Ok(())
    }

    // ==========================================
    // 输入
    // ==========================================

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// 提示并读取一个字段，校验失败时重新提示
    fn prompt<T>(
        &mut self,
        key: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        loop {
            write!(self.out, "{}", t(key))?;
            self.out.flush()?;
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let reason = e.to_string();
                    writeln!(
                        self.out,
                        "{}",
                        t_with_args("error.invalid_input", &[("reason", &reason)])
                    )?;
                }
            }
        }
    }

    fn prompt_id(&mut self, key: &str) -> Result<i64, SessionError> {
        self.prompt(key, input::parse_non_negative)
    }

    fn prompt_name(&mut self, key: &str) -> Result<String, SessionError> {
        self.prompt(key, |raw| input::parse_bounded_text(raw, NAME_MAX_LEN))
    }

    fn print_row_count(&mut self, count: usize) -> Result<(), SessionError> {
        let count = count.to_string();
        writeln!(self.out, "{}", t_with_args("result.row_count", &[("count", &count)]))?;
        Ok(())
    }

    // ==========================================
    // 新建操作
    // ==========================================

    fn add_customer(&mut self) -> OpResult {
        let customer = Customer {
            customer_id: self.prompt_id("prompt.customer_id")?,
            f_name: self.prompt_name("prompt.first_name")?,
            l_name: self.prompt_name("prompt.last_name")?,
            address: self.prompt("prompt.address", input::parse_free_text)?,
            ph_no: self.prompt("prompt.phone", input::parse_free_text)?,
            dob: self.prompt("prompt.dob", input::parse_date)?,
            gender: self.prompt("prompt.gender", input::parse_gender)?,
        };
        self.state.customers.create(&customer)?;
        writeln!(self.out, "{}", t("result.created"))?;
        Ok(())
    }

    fn add_room(&mut self) -> OpResult {
        let room = Room {
            hotel_id: self.prompt_id("prompt.hotel_id")?,
            room_no: self.prompt_id("prompt.room_no")?,
            room_type: self.prompt("prompt.room_type", |raw| {
                input::parse_bounded_text(raw, ROOM_TYPE_MAX_LEN)
            })?,
        };
        self.state.rooms.create(&room)?;
        writeln!(self.out, "{}", t("result.created"))?;
        Ok(())
    }

    fn add_maintenance_company(&mut self) -> OpResult {
        let company = MaintenanceCompany {
            cmp_id: self.prompt_id("prompt.company_id")?,
            name: self.prompt("prompt.company_name", |raw| {
                input::parse_bounded_text(raw, COMPANY_NAME_MAX_LEN)
            })?,
            address: self.prompt("prompt.company_address", input::parse_free_text)?,
            is_certified: self.prompt("prompt.is_certified", input::parse_yes_no)?,
        };
        self.state.companies.create(&company)?;
        writeln!(self.out, "{}", t("result.created"))?;
        Ok(())
    }

    fn add_repair(&mut self) -> OpResult {
        let repair = Repair {
            r_id: self.prompt_id("prompt.repair_id")?,
            hotel_id: self.prompt_id("prompt.hotel_id")?,
            room_no: self.prompt_id("prompt.room_no")?,
            m_company: self.prompt_id("prompt.company_id")?,
            repair_date: self.prompt("prompt.repair_date", input::parse_date)?,
            description: self.prompt("prompt.description", input::parse_free_text)?,
            repair_type: self.prompt("prompt.repair_type", |raw| {
                input::parse_bounded_text(raw, REPAIR_TYPE_MAX_LEN)
            })?,
        };
        self.state.repairs.create(&repair)?;
        writeln!(self.out, "{}", t("result.created"))?;
        Ok(())
    }

    fn book_room(&mut self) -> OpResult {
        let request = NewBooking {
            hotel_id: self.prompt_id("prompt.hotel_id")?,
            room_no: self.prompt_id("prompt.room_no")?,
            first_name: self.prompt_name("prompt.first_name")?,
            last_name: self.prompt_name("prompt.last_name")?,
            booking_date: self.prompt("prompt.booking_date", input::parse_date)?,
            no_of_people: self.prompt_id("prompt.no_of_people")?,
            price: self.prompt("prompt.price", input::parse_price)?,
        };
        let booking = self.state.bookings.create_booking(&request)?;
        let b_id = booking.b_id.to_string();
        let customer_id = booking.customer_id.to_string();
        writeln!(
            self.out,
            "{}",
            t_with_args(
                "result.booking_created",
                &[("b_id", &b_id), ("customer_id", &customer_id)]
            )
        )?;
        Ok(())
    }

    fn assign_house_cleaning(&mut self) -> OpResult {
        let staff_id = self.prompt_id("prompt.staff_id")?;
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let room_no = self.prompt_id("prompt.room_no")?;

        match self.state.assignments.assign_staff(staff_id, hotel_id, room_no)? {
            AssignOutcome::Assigned { asg_id, .. } => {
                let asg_id = asg_id.to_string();
                writeln!(
                    self.out,
                    "{}",
                    t_with_args("result.assigned", &[("asg_id", &asg_id)])
                )?;
            }
            AssignOutcome::NoMatchingRow => {
                writeln!(self.out, "{}", t("result.no_matching_row"))?;
            }
        }
        Ok(())
    }

    fn create_assignment(&mut self) -> OpResult {
        let staff_id = self.prompt_id("prompt.staff_id")?;
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let room_no = self.prompt_id("prompt.room_no")?;

        let assigned = self
            .state
            .assignments
            .create_assignment(staff_id, hotel_id, room_no)?;
        let asg_id = assigned.asg_id.to_string();
        writeln!(
            self.out,
            "{}",
            t_with_args("result.assignment_created", &[("asg_id", &asg_id)])
        )?;
        Ok(())
    }

    fn raise_repair_request(&mut self) -> OpResult {
        let request = NewRequest {
            staff_id: self.prompt_id("prompt.staff_id")?,
            repair_id: self.prompt_id("prompt.repair_id")?,
            request_date: self.prompt("prompt.request_date", input::parse_date)?,
            description: self.prompt("prompt.description", input::parse_free_text)?,
        };
        let created = self.state.requests.create_request(&request)?;
        let req_id = created.req_id.to_string();
        writeln!(
            self.out,
            "{}",
            t_with_args("result.request_created", &[("req_id", &req_id)])
        )?;
        Ok(())
    }

    // ==========================================
    // 报表
    // ==========================================

    fn available_rooms(&mut self) -> OpResult {
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let count = self.state.reports.available_room_count(hotel_id, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn booked_rooms(&mut self) -> OpResult {
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let count = self.state.reports.booked_room_count(hotel_id, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn bookings_for_week(&mut self) -> OpResult {
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let start = self.prompt("prompt.start_date", input::parse_date)?;
        let count = self
            .state
            .reports
            .bookings_for_week(hotel_id, start, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn top_k_prices_in_range(&mut self) -> OpResult {
        let start = self.prompt("prompt.start_date", input::parse_date)?;
        let end = self.prompt("prompt.end_date", input::parse_date)?;
        let k = self.prompt("prompt.k", input::parse_top_k)?;
        let count = self
            .state
            .reports
            .top_k_prices_in_range(k, start, end, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn top_k_prices_for_customer(&mut self) -> OpResult {
        let first_name = self.prompt_name("prompt.first_name")?;
        let last_name = self.prompt_name("prompt.last_name")?;
        let k = self.prompt("prompt.k", input::parse_top_k)?;
        let count = self.state.reports.top_k_prices_for_customer(
            k,
            &first_name,
            &last_name,
            &mut self.out,
        )?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn total_cost_for_customer(&mut self) -> OpResult {
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let first_name = self.prompt_name("prompt.first_name")?;
        let last_name = self.prompt_name("prompt.last_name")?;
        let start = self.prompt("prompt.start_date", input::parse_date)?;
        let end = self.prompt("prompt.end_date", input::parse_date)?;
        let count = self.state.reports.total_cost_for_customer(
            hotel_id,
            &first_name,
            &last_name,
            start,
            end,
            &mut self.out,
        )?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn repairs_by_company(&mut self) -> OpResult {
        let name = self.prompt_name("prompt.company_name")?;
        let count = self.state.reports.repairs_by_company(&name, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn top_k_companies(&mut self) -> OpResult {
        let k = self.prompt("prompt.k", input::parse_top_k)?;
        let count = self
            .state
            .reports
            .top_k_companies_by_repairs(k, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }

    fn repairs_per_year(&mut self) -> OpResult {
        let hotel_id = self.prompt_id("prompt.hotel_id")?;
        let room_no = self.prompt_id("prompt.room_no")?;
        let count = self
            .state
            .reports
            .repairs_per_year(hotel_id, room_no, &mut self.out)?;
        self.print_row_count(count)?;
        Ok(())
    }
}
