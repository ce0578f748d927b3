pub const PAGE: &str = "min-h-screen flex flex-col items-center bg-[#f79413] relative overflow-hidden";
pub const PAGE_BACKDROP: &str = "absolute top-0 left-0 w-full h-full bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-[#ffb142] via-[#f79413] to-[#d67d0a] z-0";
pub const PAGE_RAYS: &str = "absolute inset-0 z-0 opacity-20 pointer-events-none";
pub const HEADER: &str = "relative z-10 w-full p-6 flex flex-col items-center justify-center mt-4";
pub const HEADER_TITLE: &str = "text-4xl md:text-6xl font-black text-white uppercase tracking-tighter drop-shadow-lg text-center";
pub const HEADER_SUBTITLE: &str = "block text-[#ffeaa7] text-5xl md:text-7xl mt-2 drop-shadow-xl";
pub const MAIN: &str = "relative z-10 flex-grow flex flex-col items-center justify-center p-4 w-full max-w-6xl";
pub const FOOTER: &str = "relative z-10 p-4 text-center text-white/70 text-sm";
pub const PLAYER_BADGE: &str = "mb-4 text-center bg-white/20 backdrop-blur-md px-6 py-2 rounded-full border border-white/30";

// Registration form
pub const FORM_CARD: &str = "w-full flex flex-col lg:flex-row bg-white rounded-3xl shadow-2xl overflow-hidden max-w-5xl border-4 border-white/50";
pub const FORM_PROMO: &str = "lg:w-5/12 bg-gradient-to-br from-[#f79413] to-[#d67d0a] p-8 text-white relative overflow-hidden flex flex-col justify-center items-center text-center";
pub const FORM_BODY: &str = "lg:w-7/12 p-8 lg:p-12 bg-white relative";
pub const FORM: &str = "space-y-6";
pub const LABEL: &str = "block text-sm font-bold text-gray-700 mb-2 uppercase tracking-wide";
pub const INPUT: &str = "w-full px-4 py-3.5 bg-gray-50 rounded-xl border-2 border-gray-200 focus:border-[#f79413] focus:bg-white focus:outline-none transition-all font-medium text-gray-800 placeholder-gray-400";
pub const INPUT_ERROR: &str = "w-full px-4 py-3.5 rounded-xl border-2 border-red-500 bg-red-50 focus:outline-none transition-all font-medium text-gray-800 placeholder-gray-400";
pub const TEXT_ERROR: &str = "mt-1 text-xs text-red-500 font-semibold pl-1";
pub const SUBMIT_BUTTON: &str = "w-full bg-gradient-to-r from-[#f79413] to-[#d67d0a] text-white font-extrabold py-4 rounded-xl shadow-lg transform transition-all hover:-translate-y-1 active:scale-95 text-lg uppercase flex items-center justify-center gap-2";

// Wheel
pub const WHEEL_STAGE: &str = "relative flex flex-col items-center justify-center py-10";
pub const WHEEL_POINTER: &str = "absolute top-8 left-1/2 transform -translate-x-1/2 z-30 drop-shadow-xl";
pub const WHEEL_FRAME: &str = "relative rounded-full shadow-2xl bg-white p-2";
pub const WHEEL_HUB: &str = "absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 z-20";
pub const SPIN_BUTTON: &str = "w-20 h-20 rounded-full border-4 border-white flex items-center justify-center flex-col transition-all duration-200 bg-gradient-to-br from-[#f79413] to-[#d67d0a] hover:scale-110 active:scale-95";
pub const SPIN_BUTTON_DISABLED: &str = "w-20 h-20 rounded-full border-4 border-white flex items-center justify-center flex-col transition-all duration-200 bg-gray-400 cursor-not-allowed scale-95";

// Result modal
pub const MODAL_OVERLAY: &str = "absolute inset-0 bg-black/80 backdrop-blur-sm";
pub const MODAL: &str = "relative w-full max-w-sm bg-[#27ae60] rounded-3xl border-4 border-[#f1c40f] p-2";
pub const MODAL_BODY: &str = "bg-[#2ecc71] rounded-2xl border-2 border-[#58d68d] p-6 text-center overflow-hidden relative";
pub const MODAL_CLOSE: &str = "absolute -top-5 -right-5 w-10 h-10 bg-[#f1c40f] text-[#d35400] rounded-lg border-b-4 border-[#d35400] flex items-center justify-center font-black text-xl shadow-lg z-50";
pub const MODAL_ACTION: &str = "w-full bg-[#2980b9] hover:bg-[#3498db] text-white text-xl font-black py-3 rounded-lg border-b-[6px] border-[#154360] uppercase tracking-wider transition-all";
