use kernel::model::{space::ParkingSpace, user::User};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

/// トップレベルのモジュール（役割ビュー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Module {
    CarOwner,
    SpaceOwner,
}

impl Module {
    /// モジュール切り替え時に選択されるデフォルトのタブ
    pub fn default_tab(self) -> Tab {
        match self {
            Module::CarOwner => Tab::Search,
            Module::SpaceOwner => Tab::MySpaces,
        }
    }

    /// モジュールに属するタブの一覧。set_tab の所属チェックもここを通る
    pub fn tabs(self) -> &'static [Tab] {
        match self {
            Module::CarOwner => &[Tab::Search, Tab::MyCars, Tab::MyBookings],
            Module::SpaceOwner => &[Tab::MySpaces, Tab::AddSpace, Tab::Bookings],
        }
    }
}

/// モジュール内のサブビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Search,
    MyCars,
    MyBookings,
    MySpaces,
    AddSpace,
    Bookings,
}

/// セッション中の画面状態。
/// (module, tab) の組と、予約モーダルの選択状態を持つ。
/// 終了状態はなく、セッションの間ずっと生き続ける。
#[derive(Debug)]
pub struct SessionState {
    module: Module,
    tab: Tab,
    selected_space: Option<ParkingSpace>,
    modal_open: bool,
}

impl SessionState {
    /// 初期状態は (car_owner, search)
    pub fn new() -> Self {
        Self {
            module: Module::CarOwner,
            tab: Tab::Search,
            selected_space: None,
            modal_open: false,
        }
    }

    pub fn module(&self) -> Module {
        self.module
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_space(&self) -> Option<&ParkingSpace> {
        self.selected_space.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// モジュールを切り替える。
    /// 直前のタブが何であっても、切り替え先モジュールのデフォルトタブに戻す。
    pub fn set_module(&mut self, module: Module) {
        self.module = module;
        self.tab = module.default_tab();
    }

    /// モジュール内でタブを切り替える。モジュールは変わらない。
    /// 現在のモジュールに属さないタブは拒否する。
    pub fn set_tab(&mut self, tab: Tab) -> AppResult<()> {
        if !self.module.tabs().contains(&tab) {
            return Err(AppError::UnprocessableEntity(format!(
                "タブ（{}）はモジュール（{}）に属していません",
                tab.as_ref(),
                self.module.as_ref()
            )));
        }
        self.tab = tab;
        Ok(())
    }

    /// 検索ビューでスペースを選択し、予約モーダルを開く
    pub fn select_space(&mut self, space: ParkingSpace) {
        self.selected_space = Some(space);
        self.modal_open = true;
    }

    /// 予約モーダルを閉じ、選択状態をクリアする
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected_space = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// 外部の ID プロバイダから渡されるセッション情報。
/// このコアは loading と user の有無にしか関心を持たない。
#[derive(Debug, Default)]
pub struct AuthState {
    pub loading: bool,
    pub user: Option<User>,
}

/// 認証ゲートの判定結果
#[derive(Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    SignedOut,
    Main,
}

impl AuthState {
    pub fn screen(&self) -> Screen {
        if self.loading {
            Screen::Loading
        } else if self.user.is_none() {
            Screen::SignedOut
        } else {
            Screen::Main
        }
    }
}
