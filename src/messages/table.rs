//! Window message identifiers and their symbolic names.
//!
//! Sorted by id. Where several names share one id, the table keeps the name
//! declared last in the Windows SDK/MFC headers it was collected from.

/// `(message id, name)` pairs in ascending id order.
pub(crate) static MESSAGE_NAMES: &[(u32, &str)] = &[
    (0x0, "WM_NULL"),
    (0x1, "WM_CREATE"),
    (0x2, "WM_DESTROY"),
    (0x3, "WM_MOVE"),
    (0x4, "WM_SIZEWAIT"),
    (0x5, "WM_SIZE"),
    (0x6, "WM_ACTIVATE"),
    (0x7, "WM_SETFOCUS"),
    (0x8, "WM_KILLFOCUS"),
    (0x9, "WM_SETVISIBLE"),
    (0xA, "WM_ENABLE"),
    (0xB, "WM_SETREDRAW"),
    (0xC, "WM_SETTEXT"),
    (0xD, "WM_GETTEXT"),
    (0xE, "WM_GETTEXTLENGTH"),
    (0xF, "WM_PAINT"),
    (0x10, "WM_CLOSE"),
    (0x11, "WM_QUERYENDSESSION"),
    (0x12, "WM_QUIT"),
    (0x13, "WM_QUERYOPEN"),
    (0x14, "WM_ERASEBKGND"),
    (0x15, "WM_SYSCOLORCHANGE"),
    (0x16, "WM_ENDSESSION"),
    (0x17, "WM_SYSTEMERROR"),
    (0x18, "WM_SHOWWINDOW"),
    (0x19, "WM_CTLCOLOR"),
    (0x1A, "WM_WININICHANGE"),
    (0x1B, "WM_DEVMODECHANGE"),
    (0x1C, "WM_ACTIVATEAPP"),
    (0x1D, "WM_FONTCHANGE"),
    (0x1E, "WM_TIMECHANGE"),
    (0x1F, "WM_CANCELMODE"),
    (0x20, "WM_SETCURSOR"),
    (0x21, "WM_MOUSEACTIVATE"),
    (0x22, "WM_CHILDACTIVATE"),
    (0x23, "WM_QUEUESYNC"),
    (0x24, "WM_GETMINMAXINFO"),
    (0x25, "WM_LOGOFF"),
    (0x26, "WM_PAINTICON"),
    (0x27, "WM_ICONERASEBKGND"),
    (0x28, "WM_NEXTDLGCTL"),
    (0x29, "WM_ALTTABACTIVE"),
    (0x2A, "WM_SPOOLERSTATUS"),
    (0x2B, "WM_DRAWITEM"),
    (0x2C, "WM_MEASUREITEM"),
    (0x2D, "WM_DELETEITEM"),
    (0x2E, "WM_VKEYTOITEM"),
    (0x2F, "WM_CHARTOITEM"),
    (0x30, "WM_SETFONT"),
    (0x31, "WM_GETFONT"),
    (0x32, "WM_SETHOTKEY"),
    (0x33, "WM_GETHOTKEY"),
    (0x34, "WM_FILESYSCHANGE"),
    (0x35, "WM_ISACTIVEICON"),
    (0x36, "WM_QUERYPARKICON"),
    (0x37, "WM_QUERYDRAGICON"),
    (0x38, "WM_WINHELP"),
    (0x39, "WM_COMPAREITEM"),
    (0x3A, "WM_FULLSCREEN"),
    (0x3B, "WM_CLIENTSHUTDOWN"),
    (0x3C, "WM_DDEMLEVENT"),
    (0x3D, "WM_GETOBJECT"),
    (0x3F, "MM_CALCSCROLL"),
    (0x40, "WM_TESTING"),
    (0x41, "WM_COMPACTING"),
    (0x42, "WM_OTHERWINDOWCREATED"),
    (0x43, "WM_OTHERWINDOWDESTROYED"),
    (0x44, "WM_COMMNOTIFY"),
    (0x45, "WM_MEDIASTATUSCHANGE"),
    (0x46, "WM_WINDOWPOSCHANGING"),
    (0x47, "WM_WINDOWPOSCHANGED"),
    (0x48, "WM_POWER"),
    (0x49, "WM_COPYGLOBALDATA"),
    (0x4A, "WM_COPYDATA"),
    (0x4B, "WM_CANCELJOURNAL"),
    (0x4C, "WM_LOGONNOTIFY"),
    (0x4D, "WM_KEYF1"),
    (0x4E, "WM_NOTIFY"),
    (0x4F, "WM_ACCESS_WINDOW"),
    (0x50, "WM_INPUTLANGCHANGEREQUEST"),
    (0x51, "WM_INPUTLANGCHANGE"),
    (0x52, "WM_TCARD"),
    (0x53, "WM_HELP"),
    (0x54, "WM_USERCHANGED"),
    (0x55, "WM_NOTIFYFORMAT"),
    (0x60, "WM_QM_ACTIVATE"),
    (0x61, "WM_HOOK_DO_CALLBACK"),
    (0x62, "WM_SYSCOPYDATA"),
    (0x70, "WM_FINALDESTROY"),
    (0x71, "WM_MEASUREITEM_CLIENTDATA"),
    (0x7B, "WM_CONTEXTMENU"),
    (0x7C, "WM_STYLECHANGING"),
    (0x7D, "WM_STYLECHANGED"),
    (0x7E, "WM_DISPLAYCHANGE"),
    (0x7F, "WM_GETICON"),
    (0x80, "WM_SETICON"),
    (0x81, "WM_NCCREATE"),
    (0x82, "WM_NCDESTROY"),
    (0x83, "WM_NCCALCSIZE"),
    (0x84, "WM_NCHITTEST"),
    (0x85, "WM_NCPAINT"),
    (0x86, "WM_NCACTIVATE"),
    (0x87, "WM_GETDLGCODE"),
    (0x88, "WM_SYNCPAINT"),
    (0x89, "WM_SYNCTASK"),
    (0xA0, "WM_NCMOUSEMOVE"),
    (0xA1, "WM_NCLBUTTONDOWN"),
    (0xA2, "WM_NCLBUTTONUP"),
    (0xA3, "WM_NCLBUTTONDBLCLK"),
    (0xA4, "WM_NCRBUTTONDOWN"),
    (0xA5, "WM_NCRBUTTONUP"),
    (0xA6, "WM_NCRBUTTONDBLCLK"),
    (0xA7, "WM_NCMBUTTONDOWN"),
    (0xA8, "WM_NCMBUTTONUP"),
    (0xA9, "WM_NCMBUTTONDBLCLK"),
    (0xAB, "WM_NCXBUTTONDOWN"),
    (0xAC, "WM_NCXBUTTONUP"),
    (0xAD, "WM_NCXBUTTONDBLCLK"),
    (0xB0, "EM_GETSEL"),
    (0xB1, "EM_SETSEL"),
    (0xB2, "EM_GETRECT"),
    (0xB3, "EM_SETRECT"),
    (0xB4, "EM_SETRECTNP"),
    (0xB5, "EM_SCROLL"),
    (0xB6, "EM_LINESCROLL"),
    (0xB7, "EM_SCROLLCARET"),
    (0xB8, "IE_GETMODIFY"),
    (0xB9, "IE_SETMODIFY"),
    (0xBA, "EM_GETLINECOUNT"),
    (0xBB, "EM_LINEINDEX"),
    (0xBC, "EM_SETHANDLE"),
    (0xBD, "EM_GETHANDLE"),
    (0xBE, "EM_GETTHUMB"),
    (0xC1, "EM_LINELENGTH"),
    (0xC2, "EM_REPLACESEL"),
    (0xC3, "EM_SETFONT"),
    (0xC4, "EM_GETLINE"),
    (0xC5, "EM_SETLIMITTEXT"),
    (0xC6, "IE_CANUNDO"),
    (0xC7, "IE_UNDO"),
    (0xC8, "EM_FMTLINES"),
    (0xC9, "EM_LINEFROMCHAR"),
    (0xCA, "EM_SETWORDBREAK"),
    (0xCB, "EM_SETTABSTOPS"),
    (0xCC, "EM_SETPASSWORDCHAR"),
    (0xCD, "IE_EMPTYUNDOBUFFER"),
    (0xCE, "EM_GETFIRSTVISIBLELINE"),
    (0xCF, "EM_SETREADONLY"),
    (0xD0, "EM_SETWORDBREAKPROC"),
    (0xD1, "EM_GETWORDBREAKPROC"),
    (0xD2, "EM_GETPASSWORDCHAR"),
    (0xD3, "EM_SETMARGINS"),
    (0xD4, "EM_GETMARGINS"),
    (0xD5, "EM_GETLIMITTEXT"),
    (0xD6, "EM_POSFROMCHAR"),
    (0xD7, "EM_CHARFROMPOS"),
    (0xD8, "EM_SETIMESTATUS"),
    (0xD9, "EM_GETIMESTATUS"),
    (0xE0, "SBM_SETPOS"),
    (0xE1, "SBM_GETPOS"),
    (0xE2, "SBM_SETRANGE"),
    (0xE3, "SBM_GETRANGE"),
    (0xE4, "SBM_ENABLE_ARROWS"),
    (0xE6, "SBM_SETRANGEREDRAW"),
    (0xE9, "SBM_SETSCROLLINFO"),
    (0xEA, "SBM_GETSCROLLINFO"),
    (0xEB, "SBM_GETSCROLLBARINFO"),
    (0xF0, "BM_GETCHECK"),
    (0xF1, "BM_SETCHECK"),
    (0xF2, "BM_GETSTATE"),
    (0xF3, "BM_SETSTATE"),
    (0xF4, "BM_SETSTYLE"),
    (0xF5, "BM_CLICK"),
    (0xF6, "BM_GETIMAGE"),
    (0xF7, "BM_SETIMAGE"),
    (0xF8, "BM_SETDONTCLICK"),
    (0xFE, "WM_INPUT_DEVICE_CHANGE"),
    (0xFF, "WM_INPUT"),
    (0x100, "WM_KEYFIRST"),
    (0x101, "WM_KEYUP"),
    (0x102, "WM_CHAR"),
    (0x103, "WM_DEADCHAR"),
    (0x104, "WM_SYSKEYDOWN"),
    (0x105, "WM_SYSKEYUP"),
    (0x106, "WM_SYSCHAR"),
    (0x107, "WM_SYSDEADCHAR"),
    (0x108, "WM_YOMICHAR"),
    (0x109, "WM_WNT_CONVERTREQUESTEX"),
    (0x10A, "WM_CONVERTREQUEST"),
    (0x10B, "WM_CONVERTRESULT"),
    (0x10C, "WM_INTERIM"),
    (0x10D, "WM_IME_STARTCOMPOSITION"),
    (0x10E, "WM_IME_ENDCOMPOSITION"),
    (0x10F, "WM_IME_KEYLAST"),
    (0x110, "WM_INITDIALOG"),
    (0x111, "WM_COMMAND"),
    (0x112, "WM_SYSCOMMAND"),
    (0x113, "WM_TIMER"),
    (0x114, "WM_HSCROLL"),
    (0x115, "WM_VSCROLL"),
    (0x116, "WM_INITMENU"),
    (0x117, "WM_INITMENUPOPUP"),
    (0x118, "WM_SYSTIMER"),
    (0x119, "WM_GESTURE"),
    (0x11A, "WM_GESTURENOTIFY"),
    (0x11F, "WM_MENUSELECT"),
    (0x120, "WM_MENUCHAR"),
    (0x121, "WM_ENTERIDLE"),
    (0x122, "WM_MENURBUTTONUP"),
    (0x123, "WM_MENUDRAG"),
    (0x124, "WM_MENUGETOBJECT"),
    (0x125, "WM_UNINITMENUPOPUP"),
    (0x126, "WM_MENUCOMMAND"),
    (0x127, "WM_CHANGEUISTATE"),
    (0x128, "WM_UPDATEUISTATE"),
    (0x129, "WM_QUERYUISTATE"),
    (0x131, "WM_LBTRACKPOINT"),
    (0x132, "WM_CTLCOLORMSGBOX"),
    (0x133, "WM_CTLCOLOREDIT"),
    (0x134, "WM_CTLCOLORLISTBOX"),
    (0x135, "WM_CTLCOLORBTN"),
    (0x136, "WM_CTLCOLORDLG"),
    (0x137, "WM_CTLCOLORSCROLLBAR"),
    (0x138, "WM_CTLCOLORSTATIC"),
    (0x140, "CB_GETEDITSEL"),
    (0x141, "CB_LIMITTEXT"),
    (0x142, "CB_SETEDITSEL"),
    (0x143, "CB_ADDSTRING"),
    (0x144, "CBEM_DELETEITEM"),
    (0x145, "CB_DIR"),
    (0x146, "CB_GETCOUNT"),
    (0x147, "CB_GETCURSEL"),
    (0x148, "CB_GETLBTEXT"),
    (0x149, "CB_GETLBTEXTLEN"),
    (0x14A, "CB_INSERTSTRING"),
    (0x14B, "CB_RESETCONTENT"),
    (0x14C, "CB_FINDSTRING"),
    (0x14D, "CB_SELECTSTRING"),
    (0x14E, "CB_SETCURSEL"),
    (0x14F, "CB_SHOWDROPDOWN"),
    (0x150, "CB_GETITEMDATA"),
    (0x151, "CB_SETITEMDATA"),
    (0x152, "CB_GETDROPPEDCONTROLRECT"),
    (0x153, "CB_SETITEMHEIGHT"),
    (0x154, "CB_GETITEMHEIGHT"),
    (0x155, "CB_SETEXTENDEDUI"),
    (0x156, "CB_GETEXTENDEDUI"),
    (0x157, "CB_GETDROPPEDSTATE"),
    (0x158, "CB_FINDSTRINGEXACT"),
    (0x159, "CB_SETLOCALE"),
    (0x15A, "CB_GETLOCALE"),
    (0x15B, "CB_GETTOPINDEX"),
    (0x15C, "CB_SETTOPINDEX"),
    (0x15D, "CB_GETHORIZONTALEXTENT"),
    (0x15E, "CB_SETHORIZONTALEXTENT"),
    (0x15F, "CB_GETDROPPEDWIDTH"),
    (0x160, "CB_SETDROPPEDWIDTH"),
    (0x161, "CB_INITSTORAGE"),
    (0x163, "CB_MULTIPLEADDSTRING"),
    (0x164, "CB_GETCOMBOBOXINFO"),
    (0x170, "STM_SETICON"),
    (0x171, "STM_GETICON"),
    (0x172, "STM_SETIMAGE"),
    (0x173, "STM_GETIMAGE"),
    (0x174, "STM_MSGMAX"),
    (0x180, "LB_ADDSTRING"),
    (0x181, "LB_INSERTSTRING"),
    (0x182, "LB_DELETESTRING"),
    (0x183, "LB_SELITEMRANGEEX"),
    (0x184, "LB_RESETCONTENT"),
    (0x185, "LB_SETSEL"),
    (0x186, "LB_SETCURSEL"),
    (0x187, "LB_GETSEL"),
    (0x188, "LB_GETCURSEL"),
    (0x189, "LB_GETTEXT"),
    (0x18A, "LB_GETTEXTLEN"),
    (0x18B, "LB_GETCOUNT"),
    (0x18C, "LB_SELECTSTRING"),
    (0x18D, "LB_DIR"),
    (0x18E, "LB_GETTOPINDEX"),
    (0x18F, "LB_FINDSTRING"),
    (0x190, "LB_GETSELCOUNT"),
    (0x191, "LB_GETSELITEMS"),
    (0x192, "LB_SETTABSTOPS"),
    (0x193, "LB_GETHORIZONTALEXTENT"),
    (0x194, "LB_SETHORIZONTALEXTENT"),
    (0x195, "LB_SETCOLUMNWIDTH"),
    (0x196, "LB_ADDFILE"),
    (0x197, "LB_SETTOPINDEX"),
    (0x198, "LB_GETITEMRECT"),
    (0x199, "LB_GETITEMDATA"),
    (0x19A, "LB_SETITEMDATA"),
    (0x19B, "LB_SELITEMRANGE"),
    (0x19C, "LB_SETANCHORINDEX"),
    (0x19D, "LB_GETANCHORINDEX"),
    (0x19E, "LB_SETCARETINDEX"),
    (0x19F, "LB_GETCARETINDEX"),
    (0x1A0, "LB_SETITEMHEIGHT"),
    (0x1A1, "LB_GETITEMHEIGHT"),
    (0x1A2, "LB_FINDSTRINGEXACT"),
    (0x1A3, "LBCB_CARETON"),
    (0x1A4, "LBCB_CARETOFF"),
    (0x1A5, "LB_SETLOCALE"),
    (0x1A6, "LB_GETLOCALE"),
    (0x1A7, "LB_SETCOUNT"),
    (0x1A8, "LB_INITSTORAGE"),
    (0x1A9, "LB_ITEMFROMPOINT"),
    (0x1AA, "LB_INSERTSTRINGUPPER"),
    (0x1AB, "LB_INSERTSTRINGLOWER"),
    (0x1AC, "LB_ADDSTRINGUPPER"),
    (0x1AD, "LB_ADDSTRINGLOWER"),
    (0x1B1, "LB_MSGMAX"),
    (0x1B2, "LB_GETLISTBOXINFO"),
    (0x1E0, "MN_SETHMENU"),
    (0x1E1, "MN_GETHMENU"),
    (0x1E2, "MN_SIZEWINDOW"),
    (0x1E3, "MN_OPENHIERARCHY"),
    (0x1E4, "MN_CLOSEHIERARCHY"),
    (0x1E5, "MN_SELECTITEM"),
    (0x1E6, "MN_CANCELMENUS"),
    (0x1E7, "MN_SELECTFIRSTVALIDITEM"),
    (0x1EA, "MN_GETPPOPUPMENU"),
    (0x1EB, "MN_FINDMENUWINDOWFROMPOINT"),
    (0x1EC, "MN_SHOWPOPUPWINDOW"),
    (0x1ED, "MN_BUTTONDOWN"),
    (0x1EE, "MN_MOUSEMOVE"),
    (0x1EF, "MN_BUTTONUP"),
    (0x1F0, "MN_SETTIMERTOOPENHIERARCHY"),
    (0x1F1, "MN_DBLCLK"),
    (0x200, "WM_MOUSEMOVE"),
    (0x201, "WM_LBUTTONDOWN"),
    (0x202, "WM_LBUTTONUP"),
    (0x203, "WM_LBUTTONDBLCLK"),
    (0x204, "WM_RBUTTONDOWN"),
    (0x205, "WM_RBUTTONUP"),
    (0x206, "WM_RBUTTONDBLCLK"),
    (0x207, "WM_MBUTTONDOWN"),
    (0x208, "WM_MBUTTONUP"),
    (0x209, "WM_MOUSELAST_PRE_4"),
    (0x20A, "WM_MOUSELAST_4"),
    (0x20B, "WM_XBUTTONDOWN"),
    (0x20C, "WM_XBUTTONUP"),
    (0x20D, "WM_MOUSELAST_5"),
    (0x20E, "WM_MOUSELAST"),
    (0x210, "WM_PARENTNOTIFY"),
    (0x211, "WM_ENTERMENULOOP"),
    (0x212, "WM_EXITMENULOOP"),
    (0x213, "WM_NEXTMENU"),
    (0x214, "WM_SIZING"),
    (0x215, "WM_CAPTURECHANGED"),
    (0x216, "WM_MOVING"),
    (0x218, "WM_POWERBROADCAST"),
    (0x219, "WM_DEVICECHANGE"),
    (0x220, "WM_MDICREATE"),
    (0x221, "WM_MDIDESTROY"),
    (0x222, "WM_MDIACTIVATE"),
    (0x223, "WM_MDIRESTORE"),
    (0x224, "WM_MDINEXT"),
    (0x225, "WM_MDIMAXIMIZE"),
    (0x226, "WM_MDITILE"),
    (0x227, "WM_MDICASCADE"),
    (0x228, "WM_MDIICONARRANGE"),
    (0x229, "WM_MDIGETACTIVE"),
    (0x22A, "WM_DROPOBJECT"),
    (0x22B, "WM_QUERYDROPOBJECT"),
    (0x22C, "WM_BEGINDRAG"),
    (0x22D, "WM_DRAGLOOP"),
    (0x22E, "WM_DRAGSELECT"),
    (0x22F, "WM_DRAGMOVE"),
    (0x230, "WM_MDISETMENU"),
    (0x231, "WM_ENTERSIZEMOVE"),
    (0x232, "WM_EXITSIZEMOVE"),
    (0x233, "WM_DROPFILES"),
    (0x234, "WM_MDIREFRESHMENU"),
    (0x238, "WM_POINTERDEVICECHANGE"),
    (0x239, "WM_POINTERDEVICEINRANGE"),
    (0x23A, "WM_POINTERDEVICEOUTOFRANGE"),
    (0x240, "WM_TOUCH"),
    (0x241, "WM_NCPOINTERUPDATE"),
    (0x242, "WM_NCPOINTERDOWN"),
    (0x243, "WM_NCPOINTERUP"),
    (0x245, "WM_POINTERUPDATE"),
    (0x246, "WM_POINTERDOWN"),
    (0x247, "WM_POINTERUP"),
    (0x249, "WM_POINTERENTER"),
    (0x24A, "WM_POINTERLEAVE"),
    (0x24B, "WM_POINTERACTIVATE"),
    (0x24C, "WM_POINTERCAPTURECHANGED"),
    (0x24D, "WM_TOUCHHITTESTING"),
    (0x24E, "WM_POINTERWHEEL"),
    (0x24F, "WM_POINTERHWHEEL"),
    (0x251, "WM_POINTERROUTEDTO"),
    (0x252, "WM_POINTERROUTEDAWAY"),
    (0x253, "WM_POINTERROUTEDRELEASED"),
    (0x280, "WM_KANJIFIRST"),
    (0x281, "WM_IME_SETCONTEXT"),
    (0x282, "WM_IME_NOTIFY"),
    (0x283, "WM_IME_CONTROL"),
    (0x284, "WM_IME_COMPOSITIONFULL"),
    (0x285, "WM_IME_SELECT"),
    (0x286, "WM_IME_CHAR"),
    (0x287, "WM_IME_SYSTEM"),
    (0x288, "WM_IME_REQUEST"),
    (0x290, "WM_IMEKEYDOWN"),
    (0x291, "WM_IMEKEYUP"),
    (0x29F, "WM_KANJILAST"),
    (0x2A0, "WM_NCMOUSEHOVER"),
    (0x2A1, "WM_MOUSEHOVER"),
    (0x2A2, "WM_NCMOUSELEAVE"),
    (0x2A3, "WM_MOUSELEAVE"),
    (0x2AF, "WM_TRACKMOUSEEVENT_LAST"),
    (0x2B1, "WM_WTSSESSION_CHANGE"),
    (0x2C0, "WM_TABLET_FIRST"),
    (0x2C8, "WM_TABLET_ADDED"),
    (0x2C9, "WM_TABLET_DELETED"),
    (0x2CB, "WM_TABLET_FLICK"),
    (0x2CC, "WM_TABLET_QUERYSYSTEMGESTURESTATUS"),
    (0x2DF, "WM_TABLET_LAST"),
    (0x2E0, "WM_DPICHANGED"),
    (0x2E2, "WM_DPICHANGED_BEFOREPARENT"),
    (0x2E3, "WM_DPICHANGED_AFTERPARENT"),
    (0x2E4, "WM_GETDPISCALEDSIZE"),
    (0x300, "WM_CUT"),
    (0x301, "WM_COPY"),
    (0x302, "WM_PASTE"),
    (0x303, "WM_CLEAR"),
    (0x304, "WM_UNDO"),
    (0x305, "WM_RENDERFORMAT"),
    (0x306, "WM_RENDERALLFORMATS"),
    (0x307, "WM_DESTROYCLIPBOARD"),
    (0x308, "WM_DRAWCLIPBOARD"),
    (0x309, "WM_PAINTCLIPBOARD"),
    (0x30A, "WM_VSCROLLCLIPBOARD"),
    (0x30B, "WM_SIZECLIPBOARD"),
    (0x30C, "WM_ASKCBFORMATNAME"),
    (0x30D, "WM_CHANGECBCHAIN"),
    (0x30E, "WM_HSCROLLCLIPBOARD"),
    (0x30F, "WM_QUERYNEWPALETTE"),
    (0x310, "WM_PALETTEISCHANGING"),
    (0x311, "WM_PALETTECHANGED"),
    (0x312, "WM_HOTKEY"),
    (0x313, "WM_SYSMENU"),
    (0x314, "WM_HOOKMSG"),
    (0x315, "WM_EXITPROCESS"),
    (0x316, "WM_WAKETHREAD"),
    (0x317, "WM_PRINT"),
    (0x318, "WM_PRINTCLIENT"),
    (0x319, "WM_APPCOMMAND"),
    (0x31A, "WM_THEMECHANGED"),
    (0x31D, "WM_CLIPBOARDUPDATE"),
    (0x31E, "WM_DWMCOMPOSITIONCHANGED"),
    (0x31F, "WM_DWMNCRENDERINGCHANGED"),
    (0x320, "WM_DWMCOLORIZATIONCOLORCHANGED"),
    (0x321, "WM_DWMWINDOWMAXIMIZEDCHANGE"),
    (0x323, "WM_DWMSENDICONICTHUMBNAIL"),
    (0x326, "WM_DWMSENDICONICLIVEPREVIEWBITMAP"),
    (0x33F, "WM_GETTITLEBARINFOEX"),
    (0x358, "WM_HANDHELDFIRST"),
    (0x35F, "WM_HANDHELDLAST"),
    (0x360, "WM_QUERYAFXWNDPROC"),
    (0x361, "WM_SIZEPARENT"),
    (0x37F, "WM_AFXLAST"),
    (0x380, "WM_PENWINFIRST"),
    (0x381, "WM_RCRESULT"),
    (0x382, "WM_HOOKRCRESULT"),
    (0x383, "WM_PENMISCINFO"),
    (0x384, "WM_SKB"),
    (0x385, "WM_PENCTL"),
    (0x386, "WM_PENMISC"),
    (0x387, "WM_CTLINIT"),
    (0x388, "WM_PENEVENT"),
    (0x38F, "WM_PENWINLAST"),
    (0x390, "WM_INTERNAL_COALESCE_FIRST"),
    (0x39F, "WM_COALESCE_LAST"),
    (0x3A0, "WM_MM_RESERVED_FIRST"),
    (0x3B0, "WM_INTERNAL_COALESCE_LAST"),
    (0x3DF, "WM_MM_RESERVED_LAST"),
    (0x3E0, "WM_DDE_INITIATE"),
    (0x3E1, "WM_DDE_TERMINATE"),
    (0x3E2, "WM_DDE_ADVISE"),
    (0x3E3, "WM_DDE_UNADVISE"),
    (0x3E4, "WM_DDE_ACK"),
    (0x3E5, "WM_DDE_DATA"),
    (0x3E6, "WM_DDE_REQUEST"),
    (0x3E7, "WM_DDE_POKE"),
    (0x3E8, "WM_DDE_LAST"),
    (0x3FD, "WM_DBNOTIFICATION"),
    (0x3FE, "WM_NETCONNECT"),
    (0x3FF, "WM_HIBERNATE"),
    (0x400, "WM_USER"),
    (0x401, "WM_PSD_FULLPAGERECT"),
    (0x402, "WM_PSD_MINMARGINRECT"),
    (0x403, "WM_PSD_MARGINRECT"),
    (0x404, "WM_PSD_GREEKTEXTRECT"),
    (0x405, "WM_PSD_ENVSTAMPRECT"),
    (0x406, "WM_PSD_YAFULLPAGERECT"),
    (0x407, "WM_CAP_SET_CALLBACK_WAVESTREAM"),
    (0x408, "WM_CAP_GET_USER_DATA"),
    (0x409, "WM_CAP_SET_USER_DATA"),
    (0x40A, "WM_CAP_DRIVER_CONNECT"),
    (0x40B, "WM_CAP_DRIVER_DISCONNECT"),
    (0x40C, "WM_CAP_DRIVER_GET_NAMEA"),
    (0x40D, "WM_CAP_DRIVER_GET_VERSIONA"),
    (0x40E, "WM_CAP_DRIVER_GET_CAPS"),
    (0x40F, "TTM_GETCURRENTTOOLA"),
    (0x410, "TTM_WINDOWFROMPOINT"),
    (0x411, "TTM_TRACKACTIVATE"),
    (0x412, "TTM_TRACKPOSITION"),
    (0x413, "TTM_SETTIPBKCOLOR"),
    (0x414, "WM_CAP_FILE_SET_CAPTURE_FILEA"),
    (0x415, "WM_CAP_FILE_GET_CAPTURE_FILEA"),
    (0x416, "WM_CAP_FILE_ALLOCATE"),
    (0x417, "WM_CAP_FILE_SAVEASA"),
    (0x418, "WM_CAP_FILE_SET_INFOCHUNK"),
    (0x419, "WM_CAP_FILE_SAVEDIBA"),
    (0x41A, "TTM_SETMARGIN"),
    (0x41B, "TTM_GETMARGIN"),
    (0x41C, "TTM_POP"),
    (0x41D, "TTM_UPDATE"),
    (0x41E, "WM_CAP_EDIT_COPY"),
    (0x41F, "TTM_ADJUSTRECT"),
    (0x420, "TTM_SETTITLEA"),
    (0x421, "TTM_SETTITLEW"),
    (0x422, "TBM_SETPOSNOTIFY"),
    (0x423, "WM_CAP_SET_AUDIOFORMAT"),
    (0x424, "WM_CAP_GET_AUDIOFORMAT"),
    (0x425, "TB_SETPARENT"),
    (0x426, "RB_GETPALETTE"),
    (0x427, "TB_SETROWS"),
    (0x428, "TB_GETROWS"),
    (0x429, "WM_CAP_DLG_VIDEOFORMAT"),
    (0x42A, "WM_CAP_DLG_VIDEOSOURCE"),
    (0x42B, "WM_CAP_DLG_VIDEODISPLAY"),
    (0x42C, "WM_CAP_GET_VIDEOFORMAT"),
    (0x42D, "WM_CAP_SET_VIDEOFORMAT"),
    (0x42E, "WM_CAP_DLG_VIDEOCOMPRESSION"),
    (0x42F, "TB_SETINDENT"),
    (0x430, "TB_SETIMAGELIST"),
    (0x431, "TB_GETIMAGELIST"),
    (0x432, "WM_CAP_SET_PREVIEW"),
    (0x433, "WM_CAP_SET_OVERLAY"),
    (0x434, "WM_CAP_SET_PREVIEWRATE"),
    (0x435, "WM_CAP_SET_SCALE"),
    (0x436, "WM_CAP_GET_STATUS"),
    (0x437, "WM_CAP_SET_SCROLL"),
    (0x438, "TTM_GETTEXTW"),
    (0x439, "TTM_UPDATETIPTEXTW"),
    (0x43A, "TTM_ENUMTOOLSW"),
    (0x43B, "TTM_GETCURRENTTOOLW"),
    (0x43C, "WM_CAP_GRAB_FRAME"),
    (0x43D, "WM_CAP_GRAB_FRAME_NOSTOP"),
    (0x43E, "WM_CAP_SEQUENCE"),
    (0x43F, "WM_CAP_SEQUENCE_NOFILE"),
    (0x440, "WM_CAP_SET_SEQUENCE_SETUP"),
    (0x441, "WM_CAP_GET_SEQUENCE_SETUP"),
    (0x442, "WM_CAP_SET_MCI_DEVICEA"),
    (0x443, "WM_CAP_GET_MCI_DEVICEA"),
    (0x444, "WM_CAP_STOP"),
    (0x445, "WM_CAP_ABORT"),
    (0x446, "WM_CAP_SINGLE_FRAME_OPEN"),
    (0x447, "WM_CAP_SINGLE_FRAME_CLOSE"),
    (0x448, "WM_CAP_SINGLE_FRAME"),
    (0x449, "TB_SETANCHORHIGHLIGHT"),
    (0x44A, "TB_GETANCHORHIGHLIGHT"),
    (0x44B, "TB_GETBUTTONTEXTW"),
    (0x44C, "TB_SAVERESTOREW"),
    (0x44D, "TB_ADDSTRINGW"),
    (0x44E, "TB_MAPACCELERATORA"),
    (0x44F, "TB_GETINSERTMARK"),
    (0x450, "WM_CAP_PAL_OPENA"),
    (0x451, "WM_CAP_PAL_SAVEA"),
    (0x452, "WM_CAP_PAL_PASTE"),
    (0x453, "WM_CAP_PAL_AUTOCREATE"),
    (0x454, "WM_CAP_PAL_MANUALCREATE"),
    (0x455, "WM_CAP_SET_CALLBACK_CAPCONTROL"),
    (0x456, "TB_GETPADDING"),
    (0x457, "TB_SETPADDING"),
    (0x458, "TB_SETINSERTMARKCOLOR"),
    (0x459, "TB_GETINSERTMARKCOLOR"),
    (0x45A, "TB_MAPACCELERATORW"),
    (0x45B, "TB_GETSTRINGW"),
    (0x45C, "TB_GETSTRINGA"),
    (0x45D, "TB_SETBOUNDINGSIZE"),
    (0x45E, "TB_SETHOTITEM2"),
    (0x45F, "TB_HASACCELERATOR"),
    (0x460, "TB_SETLISTGAP"),
    (0x461, "EM_SETTEXTEX"),
    (0x462, "TB_GETIMAGELISTCOUNT"),
    (0x463, "TB_GETIDEALSIZE"),
    (0x464, "WM_CAP_UNICODE_START"),
    (0x465, "WM_CHOOSEFONT_SETLOGFONT"),
    (0x466, "WM_CHOOSEFONT_SETFLAGS"),
    (0x467, "WM_CAP_SET_CALLBACK_STATUSW"),
    (0x468, "UDM_GETPOS"),
    (0x469, "UDM_SETBUDDY"),
    (0x46A, "UDM_GETBUDDY"),
    (0x46B, "UDM_SETACCEL"),
    (0x46C, "UDM_GETACCEL"),
    (0x46D, "UDM_SETBASE"),
    (0x46E, "UDM_GETBASE"),
    (0x46F, "UDM_SETRANGE32"),
    (0x470, "WM_CAP_DRIVER_GET_NAMEW"),
    (0x471, "WM_CAP_DRIVER_GET_VERSIONW"),
    (0x472, "UDM_GETPOS32"),
    (0x473, "PSM_SETFINISHTEXTA"),
    (0x474, "PSM_GETTABCONTROL"),
    (0x475, "PSM_ISDIALOGMESSAGE"),
    (0x476, "PSM_GETCURRENTPAGEHWND"),
    (0x477, "PSM_INSERTPAGE"),
    (0x478, "WM_CAP_FILE_SET_CAPTURE_FILEW"),
    (0x479, "WM_CAP_FILE_GET_CAPTURE_FILEW"),
    (0x47A, "MCIWNDM_PLAYFROM"),
    (0x47B, "WM_CAP_FILE_SAVEASW"),
    (0x47C, "MCIWNDM_GETFILENAMEA"),
    (0x47D, "WM_CAP_FILE_SAVEDIBW"),
    (0x47E, "PSM_SETHEADERTITLEW"),
    (0x47F, "PSM_SETHEADERSUBTITLEA"),
    (0x480, "PSM_SETHEADERSUBTITLEW"),
    (0x481, "PSM_HWNDTOINDEX"),
    (0x482, "PSM_INDEXTOHWND"),
    (0x483, "PSM_PAGETOINDEX"),
    (0x484, "PSM_INDEXTOPAGE"),
    (0x485, "PSM_IDTOINDEX"),
    (0x486, "PSM_INDEXTOID"),
    (0x487, "PSM_GETRESULT"),
    (0x488, "PSM_RECALCPAGESIZES"),
    (0x489, "PSM_SETNEXTTEXTW"),
    (0x48A, "PSM_SHOWWIZBUTTONS"),
    (0x48B, "PSM_ENABLEWIZBUTTONS"),
    (0x48C, "PSM_SETBUTTONTEXTW"),
    (0x48D, "MCIWNDM_PUT_SOURCE"),
    (0x48E, "MCIWNDM_GET_DEST"),
    (0x48F, "MCIWNDM_PUT_DEST"),
    (0x490, "MCIWNDM_CAN_PLAY"),
    (0x491, "MCIWNDM_CAN_WINDOW"),
    (0x492, "MCIWNDM_CAN_RECORD"),
    (0x493, "MCIWNDM_CAN_SAVE"),
    (0x494, "MCIWNDM_CAN_EJECT"),
    (0x495, "MCIWNDM_CAN_CONFIG"),
    (0x496, "MCIWNDM_PALETTEKICK"),
    (0x497, "MCIWNDM_OPENINTERFACE"),
    (0x498, "MCIWNDM_SETOWNER"),
    (0x499, "MCIWNDM_OPENA"),
    (0x49A, "IE_GETERASERTIP"),
    (0x49B, "IE_SETERASERTIP"),
    (0x49C, "IE_GETBKGND"),
    (0x49D, "IE_SETBKGND"),
    (0x49E, "IE_GETGRIDORIGIN"),
    (0x49F, "IE_SETGRIDORIGIN"),
    (0x4A0, "IE_GETGRIDPEN"),
    (0x4A1, "IE_SETGRIDPEN"),
    (0x4A2, "IE_GETGRIDSIZE"),
    (0x4A3, "IE_SETGRIDSIZE"),
    (0x4A4, "IE_GETMODE"),
    (0x4A5, "IE_SETMODE"),
    (0x4A6, "WM_CAP_SET_MCI_DEVICEW"),
    (0x4A7, "WM_CAP_GET_MCI_DEVICEW"),
    (0x4B4, "WM_CAP_PAL_OPENW"),
    (0x4B5, "WM_CAP_UNICODE_END"),
    (0x4B8, "IE_GETAPPDATA"),
    (0x4B9, "IE_SETAPPDATA"),
    (0x4BA, "IE_GETDRAWOPTS"),
    (0x4BB, "IE_SETDRAWOPTS"),
    (0x4BC, "IE_GETFORMAT"),
    (0x4BD, "IE_SETFORMAT"),
    (0x4BE, "IE_GETINKINPUT"),
    (0x4BF, "IE_SETINKINPUT"),
    (0x4C0, "IE_GETNOTIFY"),
    (0x4C1, "IE_SETNOTIFY"),
    (0x4C2, "IE_GETRECOG"),
    (0x4C3, "IE_SETRECOG"),
    (0x4C4, "IE_GETSECURITY"),
    (0x4C5, "IE_SETSECURITY"),
    (0x4C6, "IE_GETSEL"),
    (0x4C7, "IE_SETSEL"),
    (0x4C8, "MCIWNDM_NOTIFYMODE"),
    (0x4C9, "MCIWNDM_SENDSTRINGW"),
    (0x4CA, "MCIWNDM_NOTIFYSIZE"),
    (0x4CB, "MCIWNDM_NOTIFYMEDIA"),
    (0x4CC, "IE_GETMENU"),
    (0x4CD, "MCIWNDM_NOTIFYERROR"),
    (0x4CE, "MCIWNDM_GETMODEW"),
    (0x4CF, "IE_GETSELCOUNT"),
    (0x4D0, "IE_GETSELITEMS"),
    (0x4D1, "IE_GETSTYLE"),
    (0x4DB, "MCIWNDM_SETTIMEFORMATW"),
    (0x4DC, "MCIWNDM_GETTIMEFORMATW"),
    (0x4DD, "EM_GETSCROLLPOS"),
    (0x4DE, "EM_SETSCROLLPOS"),
    (0x4DF, "EM_SETFONTSIZE"),
    (0x4E0, "MCIWNDM_GETFILENAMEW"),
    (0x4E1, "MCIWNDM_GETDEVICEW"),
    (0x4E2, "EM_GETVIEWKIND"),
    (0x4E3, "EM_SETVIEWKIND"),
    (0x4E4, "MCIWNDM_GETERRORW"),
    (0x4E5, "EM_SETPAGE"),
    (0x4E6, "EM_GETHYPHENATEINFO"),
    (0x4E7, "EM_SETHYPHENATEINFO"),
    (0x4E8, "EM_INSERTTABLE"),
    (0x4E9, "EM_GETAUTOCORRECTPROC"),
    (0x4EA, "MCIWNDM_NEWW"),
    (0x4EB, "EM_GETPAGEROTATE"),
    (0x4EC, "EM_SETPAGEROTATE"),
    (0x4ED, "EM_GETCTFMODEBIAS"),
    (0x4EE, "MCIWNDM_RETURNSTRINGW"),
    (0x4F0, "EM_GETCTFOPENSTATUS"),
    (0x4F1, "EM_SETCTFOPENSTATUS"),
    (0x4F2, "EM_GETIMECOMPTEXT"),
    (0x4F3, "EM_ISIME"),
    (0x4F4, "EM_GETIMEPROPERTY"),
    (0x4FC, "MCIWNDM_OPENW"),
    (0x4FF, "EM_CALLAUTOCORRECTPROC"),
    (0x509, "EM_GETTABLEPARMS"),
    (0x50D, "EM_GETQUERYRTFOBJ"),
    (0x50E, "EM_SETQUERYRTFOBJ"),
    (0x513, "EM_SETEDITSTYLEEX"),
    (0x514, "EM_GETEDITSTYLEEX"),
    (0x522, "EM_GETSTORYTYPE"),
    (0x523, "EM_SETSTORYTYPE"),
    (0x531, "EM_GETELLIPSISMODE"),
    (0x532, "EM_SETELLIPSISMODE"),
    (0x533, "EM_SETTABLEPARMS"),
    (0x536, "EM_GETTOUCHOPTIONS"),
    (0x537, "EM_SETTOUCHOPTIONS"),
    (0x53A, "EM_INSERTIMAGE"),
    (0x540, "EM_SETUIANAME"),
    (0x542, "EM_GETELLIPSISSTATE"),
    (0x600, "FM_GETFOCUS"),
    (0x601, "FM_GETDRIVEINFOA"),
    (0x602, "FM_GETSELCOUNT"),
    (0x603, "FM_GETSELCOUNTLFN"),
    (0x604, "FM_GETFILESELA"),
    (0x605, "FM_GETFILESELLFNA"),
    (0x606, "FM_REFRESH_WINDOWS"),
    (0x607, "FM_RELOAD_EXTENSIONS"),
    (0x611, "FM_GETDRIVEINFOW"),
    (0x614, "FM_GETFILESELW"),
    (0x615, "FM_GETFILESELLFNW"),
    (0x659, "WLX_WM_SAS"),
    (0x7E8, "WM_CPL_LAUNCH"),
    (0x7E9, "WM_CPL_LAUNCHED"),
    (0x7EA, "UM_GETUSERSELW"),
    (0x7EB, "UM_GETGROUPSELA"),
    (0x7EC, "UM_GETGROUPSELW"),
    (0x7ED, "UM_GETCURFOCUSA"),
    (0x7EE, "UM_GETCURFOCUSW"),
    (0x7EF, "UM_GETOPTIONS"),
    (0x7F0, "UM_GETOPTIONS2"),
    (0x84D, "WM_ADSPROP_NOTIFY_PAGEINIT"),
    (0x84E, "WM_ADSPROP_NOTIFY_PAGEHWND"),
    (0x84F, "WM_ADSPROP_NOTIFY_CHANGE"),
    (0x850, "WM_ADSPROP_NOTIFY_APPLY"),
    (0x851, "WM_ADSPROP_NOTIFY_SETFOCUS"),
    (0x852, "WM_ADSPROP_NOTIFY_FOREGROUND"),
    (0x853, "WM_ADSPROP_NOTIFY_EXIT"),
    (0x856, "WM_ADSPROP_NOTIFY_ERROR"),
    (0x1000, "LVM_GETBKCOLOR"),
    (0x1001, "LVM_SETBKCOLOR"),
    (0x1002, "LVM_GETIMAGELIST"),
    (0x1003, "LVM_SETIMAGELIST"),
    (0x1004, "LVM_GETITEMCOUNT"),
    (0x1005, "LVM_GETITEMA"),
    (0x1006, "LVM_SETITEMA"),
    (0x1007, "LVM_INSERTITEMA"),
    (0x1008, "LVM_DELETEITEM"),
    (0x1009, "LVM_DELETEALLITEMS"),
    (0x100A, "LVM_GETCALLBACKMASK"),
    (0x100B, "LVM_SETCALLBACKMASK"),
    (0x100C, "LVM_GETNEXTITEM"),
    (0x100D, "LVM_FINDITEMA"),
    (0x100E, "LVM_GETITEMRECT"),
    (0x100F, "LVM_SETITEMPOSITION"),
    (0x1010, "LVM_GETITEMPOSITION"),
    (0x1011, "LVM_GETSTRINGWIDTHA"),
    (0x1012, "LVM_HITTEST"),
    (0x1013, "LVM_ENSUREVISIBLE"),
    (0x1014, "LVM_SCROLL"),
    (0x1015, "LVM_REDRAWITEMS"),
    (0x1016, "LVM_ARRANGE"),
    (0x1017, "LVM_EDITLABELA"),
    (0x1018, "LVM_GETEDITCONTROL"),
    (0x1019, "LVM_GETCOLUMNA"),
    (0x101A, "LVM_SETCOLUMNA"),
    (0x101B, "LVM_INSERTCOLUMNA"),
    (0x101C, "LVM_DELETECOLUMN"),
    (0x101D, "LVM_GETCOLUMNWIDTH"),
    (0x101E, "LVM_SETCOLUMNWIDTH"),
    (0x101F, "LVM_GETHEADER"),
    (0x1021, "LVM_CREATEDRAGIMAGE"),
    (0x1022, "LVM_GETVIEWRECT"),
    (0x1023, "LVM_GETTEXTCOLOR"),
    (0x1024, "LVM_SETTEXTCOLOR"),
    (0x1025, "LVM_GETTEXTBKCOLOR"),
    (0x1026, "LVM_SETTEXTBKCOLOR"),
    (0x1027, "LVM_GETTOPINDEX"),
    (0x1028, "LVM_GETCOUNTPERPAGE"),
    (0x1029, "LVM_GETORIGIN"),
    (0x102A, "LVM_UPDATE"),
    (0x102B, "LVM_SETITEMSTATE"),
    (0x102C, "LVM_GETITEMSTATE"),
    (0x102D, "LVM_GETITEMTEXTA"),
    (0x102E, "LVM_SETITEMTEXTA"),
    (0x102F, "LVM_SETITEMCOUNT"),
    (0x1030, "LVM_SORTITEMS"),
    (0x1031, "LVM_SETITEMPOSITION32"),
    (0x1032, "LVM_GETSELECTEDCOUNT"),
    (0x1033, "LVM_GETITEMSPACING"),
    (0x1034, "LVM_GETISEARCHSTRINGA"),
    (0x1035, "LVM_SETICONSPACING"),
    (0x1036, "LVM_SETEXTENDEDLISTVIEWSTYLE"),
    (0x1037, "LVM_GETEXTENDEDLISTVIEWSTYLE"),
    (0x1038, "LVM_GETSUBITEMRECT"),
    (0x1039, "LVM_SUBITEMHITTEST"),
    (0x103A, "LVM_SETCOLUMNORDERARRAY"),
    (0x103B, "LVM_GETCOLUMNORDERARRAY"),
    (0x103C, "LVM_SETHOTITEM"),
    (0x103D, "LVM_GETHOTITEM"),
    (0x103E, "LVM_SETHOTCURSOR"),
    (0x103F, "LVM_GETHOTCURSOR"),
    (0x1040, "LVM_APPROXIMATEVIEWRECT"),
    (0x1041, "LVM_SETWORKAREAS"),
    (0x1042, "LVM_GETSELECTIONMARK"),
    (0x1043, "LVM_SETSELECTIONMARK"),
    (0x1044, "LVM_SETBKIMAGEA"),
    (0x1045, "LVM_GETBKIMAGEA"),
    (0x1046, "LVM_GETWORKAREAS"),
    (0x1047, "LVM_SETHOVERTIME"),
    (0x1048, "LVM_GETHOVERTIME"),
    (0x1049, "LVM_GETNUMBEROFWORKAREAS"),
    (0x104A, "LVM_SETTOOLTIPS"),
    (0x104B, "LVM_GETITEMW"),
    (0x104C, "LVM_SETITEMW"),
    (0x104D, "LVM_INSERTITEMW"),
    (0x104E, "LVM_GETTOOLTIPS"),
    (0x1051, "LVM_SORTITEMSEX"),
    (0x1053, "LVM_FINDITEMW"),
    (0x1057, "LVM_GETSTRINGWIDTHW"),
    (0x105C, "LVM_GETGROUPSTATE"),
    (0x105D, "LVM_GETFOCUSEDGROUP"),
    (0x105F, "LVM_GETCOLUMNW"),
    (0x1060, "LVM_SETCOLUMNW"),
    (0x1061, "LVM_INSERTCOLUMNW"),
    (0x1062, "LVM_GETGROUPRECT"),
    (0x1073, "LVM_GETITEMTEXTW"),
    (0x1074, "LVM_SETITEMTEXTW"),
    (0x1075, "LVM_GETISEARCHSTRINGW"),
    (0x1076, "LVM_EDITLABELW"),
    (0x108A, "LVM_SETBKIMAGEW"),
    (0x108B, "LVM_GETBKIMAGEW"),
    (0x108C, "LVM_SETSELECTEDCOLUMN"),
    (0x108D, "LVM_SETTILEWIDTH"),
    (0x108E, "LVM_SETVIEW"),
    (0x108F, "LVM_GETVIEW"),
    (0x1091, "LVM_INSERTGROUP"),
    (0x1093, "LVM_SETGROUPINFO"),
    (0x1095, "LVM_GETGROUPINFO"),
    (0x1096, "LVM_REMOVEGROUP"),
    (0x1097, "LVM_MOVEGROUP"),
    (0x1098, "LVM_GETGROUPCOUNT"),
    (0x1099, "LVM_GETGROUPINFOBYINDEX"),
    (0x109A, "LVM_MOVEITEMTOGROUP"),
    (0x109B, "LVM_SETGROUPMETRICS"),
    (0x109C, "LVM_GETGROUPMETRICS"),
    (0x109D, "LVM_ENABLEGROUPVIEW"),
    (0x109E, "LVM_SORTGROUPS"),
    (0x109F, "LVM_INSERTGROUPSORTED"),
    (0x10A0, "LVM_REMOVEALLGROUPS"),
    (0x10A1, "LVM_HASGROUP"),
    (0x10A2, "LVM_SETTILEVIEWINFO"),
    (0x10A3, "LVM_GETTILEVIEWINFO"),
    (0x10A4, "LVM_SETTILEINFO"),
    (0x10A5, "LVM_GETTILEINFO"),
    (0x10A6, "LVM_SETINSERTMARK"),
    (0x10A7, "LVM_GETINSERTMARK"),
    (0x10A8, "LVM_INSERTMARKHITTEST"),
    (0x10A9, "LVM_GETINSERTMARKRECT"),
    (0x10AA, "LVM_SETINSERTMARKCOLOR"),
    (0x10AB, "LVM_GETINSERTMARKCOLOR"),
    (0x10AD, "LVM_SETINFOTIP"),
    (0x10AE, "LVM_GETSELECTEDCOLUMN"),
    (0x10AF, "LVM_ISGROUPVIEWENABLED"),
    (0x10B0, "LVM_GETOUTLINECOLOR"),
    (0x10B1, "LVM_SETOUTLINECOLOR"),
    (0x10B3, "LVM_CANCELEDITLABEL"),
    (0x10B4, "LVM_MAPINDEXTOID"),
    (0x10B5, "LVM_MAPIDTOINDEX"),
    (0x10B6, "LVM_ISITEMVISIBLE"),
    (0x10CC, "LVM_GETEMPTYTEXT"),
    (0x10CD, "LVM_GETFOOTERRECT"),
    (0x10CE, "LVM_GETFOOTERINFO"),
    (0x10CF, "LVM_GETFOOTERITEMRECT"),
    (0x10D0, "LVM_GETFOOTERITEM"),
    (0x10D1, "LVM_GETITEMINDEXRECT"),
    (0x10D2, "LVM_SETITEMINDEXSTATE"),
    (0x10D3, "LVM_GETNEXTITEMINDEX"),
    (0x11EF, "WM_DLGBORDER"),
    (0x11F0, "WM_DLGSUBCLASS"),
    (0x1701, "CB_SETMINVISIBLE"),
    (0x1702, "CB_GETMINVISIBLE"),
    (0x1703, "CB_SETCUEBANNER"),
    (0x1704, "CB_GETCUEBANNER"),
    (0x2000, "OCM__BASE"),
    (0x2001, "SB_SETBKCOLOR"),
    (0x2002, "TB_SETCOLORSCHEME"),
    (0x2003, "TB_GETCOLORSCHEME"),
    (0x2004, "RB_GETDROPTARGET"),
    (0x2005, "UDM_SETUNICODEFORMAT"),
    (0x2006, "UDM_GETUNICODEFORMAT"),
    (0x200B, "TB_SETWINDOWTHEME"),
    (0x2019, "OCM_CTLCOLOR"),
    (0x202B, "OCM_DRAWITEM"),
    (0x202C, "OCM_MEASUREITEM"),
    (0x202D, "OCM_DELETEITEM"),
    (0x202E, "OCM_VKEYTOITEM"),
    (0x202F, "OCM_CHARTOITEM"),
    (0x2039, "OCM_COMPAREITEM"),
    (0x204E, "OCM_NOTIFY"),
    (0x2111, "OCM_COMMAND"),
    (0x2114, "OCM_HSCROLL"),
    (0x2115, "OCM_VSCROLL"),
    (0x2132, "OCM_CTLCOLORMSGBOX"),
    (0x2133, "OCM_CTLCOLOREDIT"),
    (0x2134, "OCM_CTLCOLORLISTBOX"),
    (0x2135, "OCM_CTLCOLORBTN"),
    (0x2136, "OCM_CTLCOLORDLG"),
    (0x2137, "OCM_CTLCOLORSCROLLBAR"),
    (0x2138, "OCM_CTLCOLORSTATIC"),
    (0x2210, "OCM_PARENTNOTIFY"),
    (0x8000, "WM_APP"),
    (0xC002, "STDOLEVERB"),
    (0xCCCD, "WM_RASDIALEVENT"),
];
